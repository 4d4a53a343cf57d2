//! Console command framing
//!
//! Raw console bytes arrive through a bounded queue. One command is one
//! newline-terminated line; extraction drains the currently available
//! bytes and either yields a complete command or fails without producing
//! one. A command is never delivered partially.

/// Line terminator byte
pub const TERMINATOR: u8 = b'\n';

/// Maximum accepted line length in bytes, terminator excluded
pub const MAX_COMMAND_LEN: usize = 32;

/// Errors that can occur while extracting a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Bytes ran out before a terminator was seen
    Incomplete,
    /// More bytes than the command buffer holds before the terminator
    Overflow,
}

/// One framed console command
///
/// Owns its payload; sent by value through the worker signals so no two
/// in-flight messages ever share a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    payload: [u8; MAX_COMMAND_LEN],
    len: usize,
}

impl Command {
    /// Extract one command from the supplied bytes
    ///
    /// Consumes bytes until the terminator. The terminator itself is
    /// consumed and not stored; the recorded length counts the bytes
    /// before it.
    ///
    /// Fails with [`FrameError::Incomplete`] if the supply runs out
    /// first, and with [`FrameError::Overflow`] if a line exceeds
    /// [`MAX_COMMAND_LEN`] (the remainder of the oversized line is
    /// drained so the next extraction starts on a fresh line).
    pub fn extract(bytes: &mut impl Iterator<Item = u8>) -> Result<Self, FrameError> {
        let mut payload = [0u8; MAX_COMMAND_LEN];
        let mut len = 0;

        loop {
            let byte = bytes.next().ok_or(FrameError::Incomplete)?;
            if byte == TERMINATOR {
                return Ok(Self { payload, len });
            }
            if len == MAX_COMMAND_LEN {
                // Drop the rest of the oversized line before failing.
                for byte in bytes {
                    if byte == TERMINATOR {
                        break;
                    }
                }
                return Err(FrameError::Overflow);
            }
            payload[len] = byte;
            len += 1;
        }
    }

    /// Payload bytes, terminator excluded
    pub fn as_bytes(&self) -> &[u8] {
        &self.payload[..self.len]
    }

    /// Payload as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Number of payload bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for an empty line
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(bytes: &[u8]) -> Result<Command, FrameError> {
        Command::extract(&mut bytes.iter().copied())
    }

    #[test]
    fn test_extract_single_line() {
        let cmd = extract_from(b"e3\n").unwrap();
        assert_eq!(cmd.as_bytes(), b"e3");
        assert_eq!(cmd.len(), 2);
    }

    #[test]
    fn test_extract_empty_line() {
        let cmd = extract_from(b"\n").unwrap();
        assert!(cmd.is_empty());
        assert_eq!(cmd.len(), 0);
    }

    #[test]
    fn test_no_terminator_is_incomplete() {
        assert_eq!(extract_from(b"exi"), Err(FrameError::Incomplete));
        assert_eq!(extract_from(b""), Err(FrameError::Incomplete));
    }

    #[test]
    fn test_extract_consumes_only_first_line() {
        let mut bytes = b"0\ne1\n".iter().copied();
        let first = Command::extract(&mut bytes).unwrap();
        assert_eq!(first.as_bytes(), b"0");

        let second = Command::extract(&mut bytes).unwrap();
        assert_eq!(second.as_bytes(), b"e1");
    }

    #[test]
    fn test_oversized_line_is_hard_failure() {
        let mut line = [b'x'; MAX_COMMAND_LEN + 4].to_vec();
        line.push(TERMINATOR);
        assert_eq!(extract_from(&line), Err(FrameError::Overflow));
    }

    #[test]
    fn test_oversized_line_drained_to_terminator() {
        let mut data = [b'x'; MAX_COMMAND_LEN + 4].to_vec();
        data.push(TERMINATOR);
        data.extend_from_slice(b"ok\n");

        let mut bytes = data.iter().copied();
        assert_eq!(Command::extract(&mut bytes), Err(FrameError::Overflow));

        let next = Command::extract(&mut bytes).unwrap();
        assert_eq!(next.as_bytes(), b"ok");
    }

    #[test]
    fn test_line_at_capacity_is_accepted() {
        let mut line = [b'y'; MAX_COMMAND_LEN].to_vec();
        line.push(TERMINATOR);
        let cmd = extract_from(&line).unwrap();
        assert_eq!(cmd.len(), MAX_COMMAND_LEN);
    }

    #[test]
    fn test_as_str() {
        let cmd = extract_from(b"exit\n").unwrap();
        assert_eq!(cmd.as_str(), Some("exit"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn payload_is_bytes_before_terminator(
                line in proptest::collection::vec(0u8..=255, 0..MAX_COMMAND_LEN)
            ) {
                prop_assume!(!line.contains(&TERMINATOR));

                let mut data = line.clone();
                data.push(TERMINATOR);

                let cmd = extract_from(&data).unwrap();
                prop_assert_eq!(cmd.as_bytes(), &line[..]);
                prop_assert_eq!(cmd.len(), line.len());
            }

            #[test]
            fn no_terminator_never_yields_a_command(
                line in proptest::collection::vec(0u8..=255, 0..MAX_COMMAND_LEN)
            ) {
                prop_assume!(!line.contains(&TERMINATOR));
                prop_assert_eq!(extract_from(&line), Err(FrameError::Incomplete));
            }
        }
    }
}
