//! Parsed trace records

use super::errors::TraceError;

/// Kind of a recorded memory access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    Instruction,
    Load,
    Store,
    /// Read-modify-write, e.g. `x++`
    Modify,
}

impl AccessKind {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(AccessKind::Instruction),
            'L' => Some(AccessKind::Load),
            'S' => Some(AccessKind::Store),
            'M' => Some(AccessKind::Modify),
            _ => None,
        }
    }

    /// Byte tag stored in the table. Store and Modify both collapse onto the
    /// write tag; the display only distinguishes fetch / load / write.
    pub fn tag(self) -> u8 {
        match self {
            AccessKind::Instruction => b'I',
            AccessKind::Load => b'L',
            AccessKind::Store | AccessKind::Modify => b'W',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccessKind::Instruction => "instr",
            AccessKind::Load => "load",
            AccessKind::Store => "store",
            AccessKind::Modify => "modify",
        }
    }
}

/// One access event pulled from a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRecord {
    pub addr: u64,
    pub size: u64,
    pub kind: AccessKind,
}

impl AccessRecord {
    /// Parse a lackey-style line: `<kind> <hex-addr>,<decimal-size>`.
    /// `line_no` is 1-based and only used for error context.
    pub fn parse(text: &str, line_no: usize) -> Result<Self, TraceError> {
        let mut fields = text.split_whitespace();
        let (kind_field, addr_field) = match (fields.next(), fields.next(), fields.next()) {
            (Some(kind), Some(addr), None) => (kind, addr),
            _ => {
                return Err(TraceError::MalformedRecord {
                    line: line_no,
                    text: text.to_string(),
                })
            }
        };

        let mut kind_chars = kind_field.chars();
        let kind = match (kind_chars.next(), kind_chars.next()) {
            (Some(symbol), None) => {
                AccessKind::from_symbol(symbol).ok_or(TraceError::UnknownKind {
                    line: line_no,
                    symbol,
                })?
            }
            _ => {
                return Err(TraceError::MalformedRecord {
                    line: line_no,
                    text: text.to_string(),
                })
            }
        };

        let (addr_text, size_text) =
            addr_field
                .split_once(',')
                .ok_or_else(|| TraceError::MalformedRecord {
                    line: line_no,
                    text: text.to_string(),
                })?;

        let addr_text = addr_text.strip_prefix("0x").unwrap_or(addr_text);
        let addr = u64::from_str_radix(addr_text, 16).map_err(|_| TraceError::BadAddress {
            line: line_no,
            text: addr_text.to_string(),
        })?;

        let size = size_text.parse::<u64>().map_err(|_| TraceError::BadSize {
            line: line_no,
            text: size_text.to_string(),
        })?;

        Ok(AccessRecord { addr, size, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        let rec = AccessRecord::parse("I 0x0023c790,2", 1).unwrap();
        assert_eq!(rec.kind, AccessKind::Instruction);
        assert_eq!(rec.addr, 0x23c790);
        assert_eq!(rec.size, 2);

        assert_eq!(
            AccessRecord::parse("L 1000,4", 1).unwrap().kind,
            AccessKind::Load
        );
        assert_eq!(
            AccessRecord::parse("S 2000,8", 1).unwrap().kind,
            AccessKind::Store
        );
        assert_eq!(
            AccessRecord::parse("M 3000,4", 1).unwrap().kind,
            AccessKind::Modify
        );
    }

    #[test]
    fn test_store_and_modify_share_write_tag() {
        assert_eq!(AccessKind::Store.tag(), b'W');
        assert_eq!(AccessKind::Modify.tag(), b'W');
        assert_ne!(AccessKind::Load.tag(), AccessKind::Instruction.tag());
    }

    #[test]
    fn test_parse_errors_carry_line_number() {
        match AccessRecord::parse("X 1000,4", 7) {
            Err(TraceError::UnknownKind { line: 7, symbol: 'X' }) => {}
            other => panic!("Expected UnknownKind, got {:?}", other),
        }
        match AccessRecord::parse("L 1000", 3) {
            Err(TraceError::MalformedRecord { line: 3, .. }) => {}
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
        match AccessRecord::parse("L zzzz,4", 9) {
            Err(TraceError::BadAddress { line: 9, .. }) => {}
            other => panic!("Expected BadAddress, got {:?}", other),
        }
        match AccessRecord::parse("L 1000,many", 2) {
            Err(TraceError::BadSize { line: 2, .. }) => {}
            other => panic!("Expected BadSize, got {:?}", other),
        }
    }
}
