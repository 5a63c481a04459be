mod path_probe;

pub use path_probe::PathProbe;
