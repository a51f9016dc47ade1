//! Supabase backend.
//!
//! Talks to the project's PostgREST endpoint (`{url}/rest/v1/{table}`) with
//! the anon/service key in both the `apikey` and `Authorization` headers.
//! Filters use PostgREST operators (`ts=gte.…`, `id=eq.…`).

mod client;

pub use client::RemoteStore;
