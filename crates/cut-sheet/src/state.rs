//! Line-by-line state machine for reading a cut sheet.
//!
//! The reader is either waiting for a header or holding the header that
//! subsequent cut lines apply to. Each fed line yields a [`LineEvent`]
//! describing what happened; no I/O is performed here.

use tracing::debug;

use crate::parse::{Cut, Header, is_reset_line, parse_cut_line, parse_header};
use crate::CutSheetError;

/// Reader state between lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SheetState {
    #[default]
    NoActiveImage,
    ActiveImage(Header),
}

/// Outcome of feeding one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    /// Blank or comment line; any active header was dropped.
    Reset,
    /// A header was accepted and is now active.
    Header(Header),
    /// No header was active and the line was not a valid header.
    HeaderRejected(CutSheetError),
    /// Active header, but the line did not have four tokens.
    Skipped(CutSheetError),
    /// Active header, four tokens, but one was not a number.
    CutRejected(CutSheetError),
    /// A cut to perform against the active header.
    Cut(Header, Cut),
}

impl SheetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&Header> {
        match self {
            SheetState::NoActiveImage => None,
            SheetState::ActiveImage(h) => Some(h),
        }
    }

    /// Feed one raw line and advance the state.
    pub fn feed(&mut self, line: &str) -> LineEvent {
        let line = line.trim();
        if is_reset_line(line) {
            *self = SheetState::NoActiveImage;
            return LineEvent::Reset;
        }

        let event = match self {
            SheetState::NoActiveImage => match parse_header(line) {
                Ok(header) => LineEvent::Header(header),
                Err(e) => LineEvent::HeaderRejected(e),
            },
            SheetState::ActiveImage(header) => match parse_cut_line(line) {
                Ok(cut) => LineEvent::Cut(header.clone(), cut),
                Err(e @ CutSheetError::WrongTokenCount(_)) => LineEvent::Skipped(e),
                Err(e) => LineEvent::CutRejected(e),
            },
        };

        if let LineEvent::Header(header) = &event {
            debug!(image = %header.image, mode = %header.mode, scalar = header.scalar, "Header accepted");
            *self = SheetState::ActiveImage(header.clone());
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_header_then_cut() {
        let mut state = SheetState::new();
        assert!(matches!(state.feed("'a.png' l 10"), LineEvent::Header(_)));

        match state.feed("1 2 1 1") {
            LineEvent::Cut(header, cut) => {
                assert_eq!(header.image, "a.png");
                assert_eq!(header.mode, Mode::Length);
                assert_eq!(cut.x_end, 2.0);
            }
            other => panic!("expected cut, got {other:?}"),
        }
        assert!(state.active().is_some());
    }

    #[test]
    fn test_comment_resets_active_header() {
        let mut state = SheetState::new();
        state.feed("'a.png' l 10");
        assert_eq!(state.feed("# next sheet"), LineEvent::Reset);
        assert_eq!(state, SheetState::NoActiveImage);

        // A cut line with no header is just a rejected header.
        assert!(matches!(
            state.feed("1 2 1 1"),
            LineEvent::HeaderRejected(_)
        ));
    }

    #[test]
    fn test_blank_line_resets_active_header() {
        let mut state = SheetState::new();
        state.feed("'a.png' h 10");
        assert_eq!(state.feed("   "), LineEvent::Reset);
        assert!(state.active().is_none());
    }

    #[test]
    fn test_wrong_token_count_keeps_header() {
        let mut state = SheetState::new();
        state.feed("'a.png' l 10");
        assert_eq!(
            state.feed("1 2 3"),
            LineEvent::Skipped(CutSheetError::WrongTokenCount(3))
        );
        assert!(matches!(state.feed("1 2 1 1"), LineEvent::Cut(..)));
    }

    #[test]
    fn test_second_header_without_reset_is_skipped() {
        let mut state = SheetState::new();
        state.feed("'a.png' l 10");
        assert!(matches!(state.feed("'b.png' l 10"), LineEvent::Skipped(_)));
        assert_eq!(state.active().map(|h| h.image.as_str()), Some("a.png"));
    }

    #[test]
    fn test_non_numeric_cut_keeps_header() {
        let mut state = SheetState::new();
        state.feed("'a.png' l 10");
        assert!(matches!(
            state.feed("1 x 1 1"),
            LineEvent::CutRejected(CutSheetError::InvalidCoordinate(_))
        ));
        assert!(state.active().is_some());
    }

    #[test]
    fn test_invalid_mode_leaves_no_active_image() {
        let mut state = SheetState::new();
        assert!(matches!(
            state.feed("'a.png' q 10"),
            LineEvent::HeaderRejected(CutSheetError::InvalidMode(_))
        ));
        assert!(state.active().is_none());
    }
}
