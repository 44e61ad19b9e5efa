//! Independent control functions, `ESC Fs`.
//!
//! The DEC private `ESC Fp` functions most terminals still emit are
//! cataloged here as well.

use crate::function::{Function, FunctionType};

const fn esc(
    mnemonic: &'static str,
    name: &'static str,
    pattern: &'static str,
) -> Function {
    Function::new(mnemonic, name, FunctionType::Independent, pattern, &[])
}

pub const DMI: Function = esc("DMI", "DISABLE MANUAL INPUT", "\u{1b}`");
pub const INT: Function = esc("INT", "INTERRUPT", "\u{1b}a");
pub const EMI: Function = esc("EMI", "ENABLE MANUAL INPUT", "\u{1b}b");
/// RIS - Full reset.
pub const RIS: Function = esc("RIS", "RESET TO INITIAL STATE", "\u{1b}c");
pub const CMD: Function = esc("CMD", "CODING METHOD DELIMITER", "\u{1b}d");
pub const LS2: Function = esc("LS2", "LOCKING-SHIFT TWO", "\u{1b}n");
pub const LS3: Function = esc("LS3", "LOCKING-SHIFT THREE", "\u{1b}o");
pub const LS3R: Function = esc("LS3R", "LOCKING-SHIFT THREE RIGHT", "\u{1b}|");
pub const LS2R: Function = esc("LS2R", "LOCKING-SHIFT TWO RIGHT", "\u{1b}}");
pub const LS1R: Function = esc("LS1R", "LOCKING-SHIFT ONE RIGHT", "\u{1b}~");

/// DECSC - Save cursor position.
pub const DECSC: Function = esc("DECSC", "SAVE CURSOR", "\u{1b}7");
/// DECRC - Restore saved cursor position.
pub const DECRC: Function = esc("DECRC", "RESTORE CURSOR", "\u{1b}8");
/// DECPAM - Application keypad.
pub const DECKPAM: Function =
    esc("DECKPAM", "KEYPAD APPLICATION MODE", "\u{1b}=");
/// DECPNM - Normal keypad.
pub const DECKPNM: Function = esc("DECKPNM", "KEYPAD NUMERIC MODE", "\u{1b}>");

pub(crate) const INDEPENDENT_FUNCTIONS: &[Function] = &[
    DMI, INT, EMI, RIS, CMD, LS2, LS3, LS3R, LS2R, LS1R, DECSC, DECRC,
    DECKPAM, DECKPNM,
];
