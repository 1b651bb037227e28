pub(crate) mod chunk_helpers;
mod properties;
