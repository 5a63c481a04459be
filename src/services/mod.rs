mod filesystem_probe;

pub use filesystem_probe::FilesystemProbe;
