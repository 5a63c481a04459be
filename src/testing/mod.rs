mod env_var_guard;
mod mock_path_probe;

pub use env_var_guard::EnvVarGuard;
pub use mock_path_probe::MockPathProbe;
