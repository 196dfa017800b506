// config file
pub const CONFIG_FILE_NAME: &str = "atoms_dump.toml";
// print level: -2 error, -1 warn, 0 info, 1 debug, 2 trace
pub const VERBOSE: i8 = 0;
// relative tolerance for lattice parameter comparisons (same as numpy.isclose)
pub const RTOL: f64 = 1e-05;
// absolute tolerance for lattice parameter comparisons and index sums
pub const ATOL: f64 = 1e-08;
// per-atom properties that are part of every system and never exported as extras
pub const ATYPE_KEY: &str = "atype";
pub const POS_KEY: &str = "pos";
pub const RESERVED_PROPERTIES: [&str; 2] = [ATYPE_KEY, POS_KEY];
// frame properties holding the periodic boundary flags of each axis
pub const PBC_PROPERTY_NAMES: [&str; 3] = ["pbc_x", "pbc_y", "pbc_z"];
