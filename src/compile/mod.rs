pub(crate) mod assembler;
pub(crate) mod dimensions;
pub(crate) mod fingerprint;
pub(crate) mod sources;
pub(crate) mod timeline;
