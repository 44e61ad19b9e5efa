//! Control sequences, `CSI P..P I..I F`.
//!
//! Patterns start after the introducer. The trailing literal of each
//! pattern is its terminator: an optional intermediate byte followed by the
//! final byte. Terminators are unique across the table.

use crate::function::DefaultValue::{Contextual, Int, Required};
use crate::function::{DefaultValue, Function, FunctionType};

const ZERO: &[DefaultValue] = &[Int(0)];
const ONE: &[DefaultValue] = &[Int(1)];
const ONE_ONE: &[DefaultValue] = &[Int(1), Int(1)];
const ZERO_ZERO: &[DefaultValue] = &[Int(0), Int(0)];
const NONE: &[DefaultValue] = &[];

const fn csi(
    mnemonic: &'static str,
    name: &'static str,
    pattern: &'static str,
    defaults: &'static [DefaultValue],
) -> Function {
    Function::new(
        mnemonic,
        name,
        FunctionType::ControlSequence,
        pattern,
        defaults,
    )
}

// Without intermediate bytes.

/// ICH
pub const ICH: Function = csi("ICH", "INSERT CHARACTER", "{s}@", ONE);
/// CUU
pub const CUU: Function = csi("CUU", "CURSOR UP", "{s}A", ONE);
/// CUD
pub const CUD: Function = csi("CUD", "CURSOR DOWN", "{s}B", ONE);
/// CUF
pub const CUF: Function = csi("CUF", "CURSOR RIGHT", "{s}C", ONE);
/// CUB
pub const CUB: Function = csi("CUB", "CURSOR LEFT", "{s}D", ONE);
/// CNL
pub const CNL: Function = csi("CNL", "CURSOR NEXT LINE", "{s}E", ONE);
/// CPL
pub const CPL: Function = csi("CPL", "CURSOR PRECEDING LINE", "{s}F", ONE);
/// CHA
pub const CHA: Function =
    csi("CHA", "CURSOR CHARACTER ABSOLUTE", "{s}G", ONE);
/// CUP
pub const CUP: Function = csi("CUP", "CURSOR POSITION", "{s};{s}H", ONE_ONE);
/// CHT
pub const CHT: Function =
    csi("CHT", "CURSOR FORWARD TABULATION", "{s}I", ONE);
/// ED
pub const ED: Function = csi("ED", "ERASE IN PAGE", "{s}J", ZERO);
/// EL
pub const EL: Function = csi("EL", "ERASE IN LINE", "{s}K", ZERO);
pub const IL: Function = csi("IL", "INSERT LINE", "{s}L", ONE);
pub const DL: Function = csi("DL", "DELETE LINE", "{s}M", ONE);
pub const EF: Function = csi("EF", "ERASE IN FIELD", "{s}N", ZERO);
pub const EA: Function = csi("EA", "ERASE IN AREA", "{s}O", ZERO);
pub const DCH: Function = csi("DCH", "DELETE CHARACTER", "{s}P", ONE);
pub const SEE: Function = csi("SEE", "SELECT EDITING EXTENT", "{s}Q", ZERO);
pub const CPR: Function =
    csi("CPR", "ACTIVE POSITION REPORT", "{s};{s}R", ONE_ONE);
pub const SU: Function = csi("SU", "SCROLL UP", "{s}S", ONE);
pub const SD: Function = csi("SD", "SCROLL DOWN", "{s}T", ONE);
pub const NP: Function = csi("NP", "NEXT PAGE", "{s}U", ONE);
pub const PP: Function = csi("PP", "PRECEDING PAGE", "{s}V", ONE);
pub const CTC: Function = csi("CTC", "CURSOR TABULATION CONTROL", "{m}W", ZERO);
pub const ECH: Function = csi("ECH", "ERASE CHARACTER", "{s}X", ONE);
pub const CVT: Function =
    csi("CVT", "CURSOR LINE TABULATION", "{s}Y", ONE);
pub const CBT: Function =
    csi("CBT", "CURSOR BACKWARD TABULATION", "{s}Z", ONE);
pub const SRS: Function =
    csi("SRS", "START REVERSED STRING", "{s}[", ZERO);
pub const PTX: Function = csi("PTX", "PARALLEL TEXTS", "{s}\\", ZERO);
pub const SDS: Function =
    csi("SDS", "START DIRECTED STRING", "{s}]", ZERO);
pub const SIMD: Function =
    csi("SIMD", "SELECT IMPLICIT MOVEMENT DIRECTION", "{s}^", ZERO);
pub const HPA: Function =
    csi("HPA", "CHARACTER POSITION ABSOLUTE", "{s}`", ONE);
pub const HPR: Function =
    csi("HPR", "CHARACTER POSITION FORWARD", "{s}a", ONE);
/// REP
pub const REP: Function = csi("REP", "REPEAT", "{s}b", ONE);
/// DA
pub const DA: Function = csi("DA", "DEVICE ATTRIBUTES", "{s}c", ZERO);
pub const VPA: Function = csi("VPA", "LINE POSITION ABSOLUTE", "{s}d", ONE);
pub const VPR: Function = csi("VPR", "LINE POSITION FORWARD", "{s}e", ONE);
pub const HVP: Function =
    csi("HVP", "CHARACTER AND LINE POSITION", "{s};{s}f", ONE_ONE);
pub const TBC: Function = csi("TBC", "TABULATION CLEAR", "{s}g", ZERO);
/// SM
pub const SM: Function = csi("SM", "SET MODE", "{m}h", NONE);
pub const MC: Function = csi("MC", "MEDIA COPY", "{s}i", ZERO);
pub const HPB: Function =
    csi("HPB", "CHARACTER POSITION BACKWARD", "{s}j", ONE);
pub const VPB: Function = csi("VPB", "LINE POSITION BACKWARD", "{s}k", ONE);
/// RM
pub const RM: Function = csi("RM", "RESET MODE", "{m}l", NONE);
/// SGR sequences
pub const SGR: Function =
    csi("SGR", "SELECT GRAPHIC RENDITION", "{m}m", ZERO);
/// DSR
pub const DSR: Function = csi("DSR", "DEVICE STATUS REPORT", "{s}n", ZERO);
pub const DAQ: Function =
    csi("DAQ", "DEFINE AREA QUALIFICATION", "{m}o", ZERO);

/// DECSTBM, the bottom margin defaults to the page height.
pub const DECSTBM: Function = csi(
    "DECSTBM",
    "SET TOP AND BOTTOM MARGINS",
    "{s};{s}r",
    &[Int(1), Contextual],
);
/// SCOSC
pub const SCOSC: Function = csi("SCOSC", "SAVE CURSOR", "s", NONE);
/// SCORC
pub const SCORC: Function = csi("SCORC", "RESTORE CURSOR", "u", NONE);

// With the intermediate byte 02/00.

pub const SL: Function = csi("SL", "SCROLL LEFT", "{s} @", ONE);
pub const SR: Function = csi("SR", "SCROLL RIGHT", "{s} A", ONE);
pub const GSM: Function = csi(
    "GSM",
    "GRAPHIC SIZE MODIFICATION",
    "{s};{s} B",
    &[Int(100), Int(100)],
);
/// GSS, the default size depends on the current font.
pub const GSS: Function =
    csi("GSS", "GRAPHIC SIZE SELECTION", "{s} C", &[Contextual]);
pub const FNT: Function = csi("FNT", "FONT SELECTION", "{s};{s} D", ZERO_ZERO);
/// TSS, the default width depends on the current font.
pub const TSS: Function =
    csi("TSS", "THIN SPACE SPECIFICATION", "{s} E", &[Contextual]);
pub const JFY: Function = csi("JFY", "JUSTIFY", "{m} F", ZERO);
/// SPI, both spacings default to the ones of the current font.
pub const SPI: Function = csi(
    "SPI",
    "SPACING INCREMENT",
    "{s};{s} G",
    &[Contextual, Contextual],
);
pub const QUAD: Function = csi("QUAD", "QUAD", "{m} H", ZERO);
pub const SSU: Function = csi("SSU", "SELECT SIZE UNIT", "{s} I", ZERO);
pub const PFS: Function = csi("PFS", "PAGE FORMAT SELECTION", "{s} J", ZERO);
pub const SHS: Function =
    csi("SHS", "SELECT CHARACTER SPACING", "{s} K", ZERO);
pub const SVS: Function = csi("SVS", "SELECT LINE SPACING", "{s} L", ZERO);
pub const IGS: Function =
    csi("IGS", "IDENTIFY GRAPHIC SUBREPERTOIRE", "{s} M", NONE);
pub const IDCS: Function =
    csi("IDCS", "IDENTIFY DEVICE CONTROL STRING", "{s} O", NONE);
pub const PPA: Function = csi("PPA", "PAGE POSITION ABSOLUTE", "{s} P", ONE);
pub const PPR: Function = csi("PPR", "PAGE POSITION FORWARD", "{s} Q", ONE);
pub const PPB: Function = csi("PPB", "PAGE POSITION BACKWARD", "{s} R", ONE);
pub const SPD: Function =
    csi("SPD", "SELECT PRESENTATION DIRECTIONS", "{s};{s} S", ZERO_ZERO);
pub const DTA: Function =
    csi("DTA", "DIMENSION TEXT AREA", "{s};{s} T", NONE);
pub const SLH: Function = csi("SLH", "SET LINE HOME", "{s} U", NONE);
pub const SLL: Function = csi("SLL", "SET LINE LIMIT", "{s} V", NONE);
pub const FNK: Function = csi("FNK", "FUNCTION KEY", "{s} W", NONE);
pub const SPQR: Function =
    csi("SPQR", "SELECT PRINT QUALITY AND RAPIDITY", "{s} X", ZERO);
pub const SEF: Function =
    csi("SEF", "SHEET EJECT AND FEED", "{s};{s} Y", ZERO_ZERO);
pub const PEC: Function =
    csi("PEC", "PRESENTATION EXPAND OR CONTRACT", "{s} Z", ZERO);
pub const SSW: Function = csi("SSW", "SET SPACE WIDTH", "{s} [", NONE);
pub const SACS: Function =
    csi("SACS", "SET ADDITIONAL CHARACTER SEPARATION", "{s} \\", NONE);
pub const SAPV: Function =
    csi("SAPV", "SELECT ALTERNATIVE PRESENTATION VARIANTS", "{m} ]", ZERO);
pub const STAB: Function = csi("STAB", "SELECTIVE TABULATION", "{s} ^", NONE);
pub const GCC: Function =
    csi("GCC", "GRAPHIC CHARACTER COMBINATION", "{s} _", ZERO);
pub const TATE: Function =
    csi("TATE", "TABULATION ALIGNED TRAILING EDGE", "{s} `", NONE);
pub const TALE: Function =
    csi("TALE", "TABULATION ALIGNED LEADING EDGE", "{s} a", NONE);
pub const TAC: Function =
    csi("TAC", "TABULATION ALIGNED CENTRED", "{s} b", NONE);
/// TCC, the position must be given and the character defaults to SPACE.
pub const TCC: Function = csi(
    "TCC",
    "TABULATION CENTRED ON CHARACTER",
    "{s};{s} c",
    &[Required, Int(32)],
);
pub const TSR: Function = csi("TSR", "TABULATION STOP REMOVE", "{s} d", NONE);
pub const SCO: Function =
    csi("SCO", "SELECT CHARACTER ORIENTATION", "{s} e", ZERO);
pub const SRCS: Function =
    csi("SRCS", "SET REDUCED CHARACTER SEPARATION", "{s} f", ZERO);
pub const SCS: Function =
    csi("SCS", "SET CHARACTER SPACING", "{s} g", NONE);
pub const SLS: Function = csi("SLS", "SET LINE SPACING", "{s} h", NONE);
pub const SPH: Function = csi("SPH", "SET PAGE HOME", "{s} i", NONE);
pub const SPL: Function = csi("SPL", "SET PAGE LIMIT", "{s} j", NONE);
pub const SCP: Function =
    csi("SCP", "SELECT CHARACTER PATH", "{s};{s} k", NONE);
/// DECSCUSR
pub const DECSCUSR: Function =
    csi("DECSCUSR", "SET CURSOR STYLE", "{s} q", ZERO);

pub(crate) const CONTROL_SEQUENCES: &[Function] = &[
    ICH, CUU, CUD, CUF, CUB, CNL, CPL, CHA, CUP, CHT, ED, EL, IL, DL, EF, EA,
    DCH, SEE, CPR, SU, SD, NP, PP, CTC, ECH, CVT, CBT, SRS, PTX, SDS, SIMD,
    HPA, HPR, REP, DA, VPA, VPR, HVP, TBC, SM, MC, HPB, VPB, RM, SGR, DSR,
    DAQ, DECSTBM, SCOSC, SCORC, SL, SR, GSM, GSS, FNT, TSS, JFY, SPI, QUAD,
    SSU, PFS, SHS, SVS, IGS, IDCS, PPA, PPR, PPB, SPD, DTA, SLH, SLL, FNK,
    SPQR, SEF, PEC, SSW, SACS, SAPV, STAB, GCC, TATE, TALE, TAC, TCC, TSR,
    SCO, SRCS, SCS, SLS, SPH, SPL, SCP, DECSCUSR,
];
