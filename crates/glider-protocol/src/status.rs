//! Device status reports.

use core::fmt;

use byteorder::{ByteOrder, LittleEndian};

/// Length of the status report the device sends after each command.
pub const REPORT_LEN: usize = 32;

/// Outcome the device reports for a command.
///
/// The first two bytes of the report are a little-endian status word:
/// `0x0000` means the firmware did not recognize the opcode, `0x0001`
/// that the frame checksum did not match. Any other word is an
/// acknowledgement (the firmware sends `0x0055`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ack,
    InvalidCommand,
    BadChecksum,
}

impl Status {
    pub fn from_word(word: u16) -> Self {
        match word {
            0x0000 => Status::InvalidCommand,
            0x0001 => Status::BadChecksum,
            _ => Status::Ack,
        }
    }

    /// Parse a status report. Returns `None` for a runt report that does
    /// not even carry a status word.
    pub fn from_report(report: &[u8]) -> Option<Self> {
        if report.len() < 2 {
            return None;
        }
        Some(Self::from_word(LittleEndian::read_u16(report)))
    }

    pub fn is_ack(self) -> bool {
        self == Status::Ack
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ack => write!(f, "acknowledged"),
            Status::InvalidCommand => write!(f, "invalid command"),
            Status::BadChecksum => write!(f, "checksum incorrect"),
        }
    }
}
