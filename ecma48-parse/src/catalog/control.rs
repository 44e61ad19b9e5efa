//! C0 and C1 control functions.
//!
//! Patterns hold the 8-bit code point. In a 7-bit environment a C1 function
//! is written as `ESC` followed by its code minus 0x40, see
//! [`to_seven_bit`] and [`from_seven_bit`].

use crate::function::{Function, FunctionType};

const fn c0(
    mnemonic: &'static str,
    name: &'static str,
    pattern: &'static str,
) -> Function {
    Function::new(mnemonic, name, FunctionType::C0, pattern, &[])
}

const fn c1(
    mnemonic: &'static str,
    name: &'static str,
    pattern: &'static str,
) -> Function {
    Function::new(mnemonic, name, FunctionType::C1, pattern, &[])
}

// C0

/// (NUL, Caret = ^@) Null.
pub const NUL: Function = c0("NUL", "NULL", "\u{00}");
pub const SOH: Function = c0("SOH", "START OF HEADING", "\u{01}");
pub const STX: Function = c0("STX", "START OF TEXT", "\u{02}");
pub const ETX: Function = c0("ETX", "END OF TEXT", "\u{03}");
pub const EOT: Function = c0("EOT", "END OF TRANSMISSION", "\u{04}");
pub const ENQ: Function = c0("ENQ", "ENQUIRY", "\u{05}");
pub const ACK: Function = c0("ACK", "ACKNOWLEDGE", "\u{06}");
/// (BEL, Caret = ^G, C = \a) Bell, triggers the bell, buzzer, or beeper.
pub const BEL: Function = c0("BEL", "BELL", "\u{07}");
/// (BS, Caret = ^H, C = \b) Backspace.
pub const BS: Function = c0("BS", "BACKSPACE", "\u{08}");
/// (HT, Caret = ^I, C = \t) Horizontal tabulation.
pub const HT: Function = c0("HT", "CHARACTER TABULATION", "\u{09}");
/// (LF, Caret = ^J, C = \n) Line feed.
pub const LF: Function = c0("LF", "LINE FEED", "\u{0a}");
/// (VT, Caret = ^K, C = \v) Vertical tabulation.
pub const VT: Function = c0("VT", "LINE TABULATION", "\u{0b}");
/// (FF, Caret = ^L, C = \f) Form feed.
pub const FF: Function = c0("FF", "FORM FEED", "\u{0c}");
/// (CR, Caret = ^M, C = \r) Carriage return.
pub const CR: Function = c0("CR", "CARRIAGE RETURN", "\u{0d}");
/// (SO, Caret = ^N) Shift out, also known as LS1.
pub const SO: Function = c0("SO", "SHIFT-OUT", "\u{0e}");
/// (SI, Caret = ^O) Shift in, also known as LS0.
pub const SI: Function = c0("SI", "SHIFT-IN", "\u{0f}");
pub const DLE: Function = c0("DLE", "DATA LINK ESCAPE", "\u{10}");
pub const DC1: Function = c0("DC1", "DEVICE CONTROL ONE", "\u{11}");
pub const DC2: Function = c0("DC2", "DEVICE CONTROL TWO", "\u{12}");
pub const DC3: Function = c0("DC3", "DEVICE CONTROL THREE", "\u{13}");
pub const DC4: Function = c0("DC4", "DEVICE CONTROL FOUR", "\u{14}");
pub const NAK: Function = c0("NAK", "NEGATIVE ACKNOWLEDGE", "\u{15}");
pub const SYN: Function = c0("SYN", "SYNCHRONOUS IDLE", "\u{16}");
pub const ETB: Function = c0("ETB", "END OF TRANSMISSION BLOCK", "\u{17}");
/// (CAN, Caret = ^X) Cancel.
pub const CAN: Function = c0("CAN", "CANCEL", "\u{18}");
pub const EM: Function = c0("EM", "END OF MEDIUM", "\u{19}");
/// (SUB, Caret = ^Z) Substitute.
pub const SUB: Function = c0("SUB", "SUBSTITUTE", "\u{1a}");
/// (ESC, Caret = ^[) Escape, only reported alone when nothing cataloged
/// follows it.
pub const ESCAPE: Function = c0("ESC", "ESCAPE", "\u{1b}");
pub const IS4: Function = c0("IS4", "INFORMATION SEPARATOR FOUR", "\u{1c}");
pub const IS3: Function = c0("IS3", "INFORMATION SEPARATOR THREE", "\u{1d}");
pub const IS2: Function = c0("IS2", "INFORMATION SEPARATOR TWO", "\u{1e}");
pub const IS1: Function = c0("IS1", "INFORMATION SEPARATOR ONE", "\u{1f}");

// C1

pub const BPH: Function = c1("BPH", "BREAK PERMITTED HERE", "\u{82}");
pub const NBH: Function = c1("NBH", "NO BREAK HERE", "\u{83}");
/// (IND) Index. Withdrawn from ECMA-48 but still emitted by DEC terminals.
pub const IND: Function = c1("IND", "INDEX", "\u{84}");
/// (NEL) Next line.
pub const NEL: Function = c1("NEL", "NEXT LINE", "\u{85}");
pub const SSA: Function = c1("SSA", "START OF SELECTED AREA", "\u{86}");
pub const ESA: Function = c1("ESA", "END OF SELECTED AREA", "\u{87}");
/// (HTS) Horizontal tabulation set.
pub const HTS: Function = c1("HTS", "CHARACTER TABULATION SET", "\u{88}");
pub const HTJ: Function =
    c1("HTJ", "CHARACTER TABULATION WITH JUSTIFICATION", "\u{89}");
pub const VTS: Function = c1("VTS", "LINE TABULATION SET", "\u{8a}");
pub const PLD: Function = c1("PLD", "PARTIAL LINE FORWARD", "\u{8b}");
pub const PLU: Function = c1("PLU", "PARTIAL LINE BACKWARD", "\u{8c}");
/// (RI) Reverse index.
pub const RI: Function = c1("RI", "REVERSE LINE FEED", "\u{8d}");
pub const SS2: Function = c1("SS2", "SINGLE-SHIFT TWO", "\u{8e}");
pub const SS3: Function = c1("SS3", "SINGLE-SHIFT THREE", "\u{8f}");
pub const PU1: Function = c1("PU1", "PRIVATE USE ONE", "\u{91}");
pub const PU2: Function = c1("PU2", "PRIVATE USE TWO", "\u{92}");
pub const STS: Function = c1("STS", "SET TRANSMIT STATE", "\u{93}");
pub const CCH: Function = c1("CCH", "CANCEL CHARACTER", "\u{94}");
pub const MW: Function = c1("MW", "MESSAGE WAITING", "\u{95}");
pub const SPA: Function = c1("SPA", "START OF GUARDED AREA", "\u{96}");
pub const EPA: Function = c1("EPA", "END OF GUARDED AREA", "\u{97}");
/// (SCI) Single character introducer, followed by exactly one character.
pub const SCI: Function =
    c1("SCI", "SINGLE CHARACTER INTRODUCER", "\u{9a}{c}");
/// (CSI) Control sequence introducer.
pub const CSI: Function = c1("CSI", "CONTROL SEQUENCE INTRODUCER", "\u{9b}");
/// (ST) String terminator.
pub const ST: Function = c1("ST", "STRING TERMINATOR", "\u{9c}");

pub(crate) const C0_FUNCTIONS: &[Function] = &[
    NUL, SOH, STX, ETX, EOT, ENQ, ACK, BEL, BS, HT, LF, VT, FF, CR, SO, SI,
    DLE, DC1, DC2, DC3, DC4, NAK, SYN, ETB, CAN, EM, SUB, ESCAPE, IS4, IS3,
    IS2, IS1,
];

pub(crate) const C1_FUNCTIONS: &[Function] = &[
    BPH, NBH, IND, NEL, SSA, ESA, HTS, HTJ, VTS, PLD, PLU, RI, SS2, SS3, PU1,
    PU2, STS, CCH, MW, SPA, EPA, SCI, CSI, ST,
];

/// Designator following `ESC` for a C1 code point.
pub fn to_seven_bit(code: char) -> Option<char> {
    match code {
        '\u{80}'..='\u{9f}' => char::from_u32(code as u32 - 0x40),
        _ => None,
    }
}

/// C1 code point designated by the character following `ESC`.
pub fn from_seven_bit(designator: char) -> Option<char> {
    match designator {
        '\u{40}'..='\u{5f}' => char::from_u32(designator as u32 + 0x40),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_c0_code_is_cataloged_once() {
        let mut codes: Vec<char> =
            C0_FUNCTIONS.iter().filter_map(Function::code).collect();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), 0x20);
        assert_eq!(codes.first(), Some(&'\u{00}'));
        assert_eq!(codes.last(), Some(&'\u{1f}'));
    }

    #[test]
    fn seven_bit_designators() {
        let cases = vec![
            ('\u{9b}', '['),
            ('\u{85}', 'E'),
            ('\u{9c}', '\\'),
            ('\u{9d}', ']'),
        ];

        for (code, designator) in cases {
            assert_eq!(to_seven_bit(code), Some(designator));
            assert_eq!(from_seven_bit(designator), Some(code));
        }

        assert_eq!(to_seven_bit('A'), None);
        assert_eq!(from_seven_bit('c'), None);
    }
}
