mod microlp_backend;

pub use microlp_backend::MicrolpSolver;
