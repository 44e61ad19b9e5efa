//! Control strings: an opening delimiter, a command string and `ST`.

use crate::function::{Function, FunctionType};

const fn string(
    mnemonic: &'static str,
    name: &'static str,
    pattern: &'static str,
) -> Function {
    Function::new(mnemonic, name, FunctionType::ControlString, pattern, &[])
}

pub const DCS: Function = string("DCS", "DEVICE CONTROL STRING", "\u{90}{t}");
pub const SOS: Function = string("SOS", "START OF STRING", "\u{98}{t}");
/// OSC is also terminated by BEL, as xterm does.
pub const OSC: Function =
    string("OSC", "OPERATING SYSTEM COMMAND", "\u{9d}{t}");
pub const PM: Function = string("PM", "PRIVACY MESSAGE", "\u{9e}{t}");
pub const APC: Function =
    string("APC", "APPLICATION PROGRAM COMMAND", "\u{9f}{t}");

pub(crate) const CONTROL_STRINGS: &[Function] = &[DCS, SOS, OSC, PM, APC];
