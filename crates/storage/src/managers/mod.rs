pub(crate) mod checkpoint;
