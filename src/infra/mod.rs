pub mod webclient;
