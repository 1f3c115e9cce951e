// Glider controller command opcodes

pub const CMD_REDRAW: i16 = 0x04; // Redraw a region (full black/white flash)
pub const CMD_SET_MODE: i16 = 0x05; // Assign an update mode to a region
