pub(crate) mod fake_backend;
