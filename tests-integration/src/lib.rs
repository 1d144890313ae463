//! Integration tests of the light-client registry. The tests live under
//! `tests/`; this crate exports nothing.
