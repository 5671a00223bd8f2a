//! Points awarded to soups for the objects they produce
//!
//! Named objects carry fixed values, roughly 15 + log2(n) for an object n
//! times rarer than the pentadecathlon. Everything else is scored by class:
//! still lifes by population up to 20, oscillators 20/30/40 by period,
//! spaceships 50 and anything unbounded or unresolved 60.

use crate::analysis::code::ObjectCode;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Points for a still life per live cell, up to this cap
pub const STILL_LIFE_CAP: u64 = 20;
/// Points for a period 2 oscillator
pub const P2_POINTS: u64 = 20;
/// Points for a period 3 or 4 oscillator
pub const P3_P4_POINTS: u64 = 30;
/// Points for any other oscillator
pub const OSCILLATOR_POINTS: u64 = 40;
/// Points for a spaceship
pub const SPACESHIP_POINTS: u64 = 50;
/// Points for growth patterns and unresolved objects
pub const UNBOUNDED_POINTS: u64 = 60;

/// Objects with familiar names: code, name, points
const COMMON_NAMES: &[(&str, &str, u64)] = &[
    ("xp3_co9nas0san9oczgoldlo0oldlogz1047210127401", "pulsar", 8),
    ("xp15_4r4z4r4", "pentadecathlon", 15),
    ("xp2_2a54", "clock", 16),
    ("xp2_31ago", "bipole", 17),
    ("xp2_0g0k053z32", "quadpole", 18),
    ("xp2_g8gid1e8z1226", "great on-off", 19),
    ("xp2_rhewehr", "spark coil", 19),
    ("xp8_gk2gb3z11", "figure-8", 20),
    ("xp4_37bkic", "mold", 21),
    ("xp2_31a08zy0123cko", "quadpole on ship", 20),
    ("xp2_g0k053z11", "tripole", 20),
    ("xp4_ssj3744zw3", "mazing", 23),
    ("xp8_g3jgz1ut", "blocker", 24),
    ("xp3_695qc8zx33", "jam", 24),
    ("xp30_w33z8kqrqk8zzzw33", "cis-queen-bee-shuttle", 24),
    ("xp30_w33z8kqrqk8zzzx33", "trans-queen-bee-shuttle", 24),
    ("xp4_8eh5e0e5he8z178a707a871", "cloverleaf", 25),
    ("xp5_idiidiz01w1", "octagon II", 26),
    ("xp6_ccb7w66z066", "unix", 26),
    ("xp14_j9d0d9j", "tumbler", 27),
    ("xp3_025qzrq221", "trans-tub-eater", 28),
    ("xp3_4hh186z07", "caterer", 29),
    ("xp3_025qz32qq1", "cis-tub-eater", 30),
    ("xp8_wgovnz234z33", "Tim Coe's p8", 31),
    ("xp5_3pmwmp3zx11", "fumarole", 33),
    ("xp46_330279cx1aad3y833zx4e93x855bc", "cis-twin-bees-shuttle", 35),
    ("xp46_330279cx1aad3zx4e93x855bcy8cc", "trans-twin-bees-shuttle", 35),
    ("yl144_1_16_afb5f3db909e60548f086e22ee3353ac", "block-laying switch engine", 16),
    ("yl384_1_59_7aeb1999980c43b4945fb7fcdb023326", "glider-producing switch engine", 17),
    ("xp10_9hr", "[HighLife] p10", 6),
    ("xp7_13090c8", "[HighLife] p7", 9),
    ("xq48_07z8ca7zy1e531", "[HighLife] bomber", 9),
    ("xq4_153", "glider", 0),
    ("xq4_6frc", "lightweight spaceship", 7),
    ("xq4_27dee6", "middleweight spaceship", 9),
    ("xq4_27deee6", "heavyweight spaceship", 12),
    ("xq7_3nw17862z6952", "loafer", 999),
    ("xs8_rr", "bi-block", 0),
    ("xs10_660696", "block on beehive", 0),
    ("xs9_253033", "block on boat", 0),
    ("xs12_6960696", "bi-beehive", 0),
    ("xs11_2596066", "block on loaf", 0),
    ("xp2_rbzw23", "block on beacon", 0),
    ("xs10_2530352", "cis bi-boat", 0),
    ("xs12_6606996", "block on pond", 0),
    ("xs12_3560653", "cis bi-ship", 0),
    ("xs11_2560696", "boat on beehive", 0),
    ("xs10_330356", "block on ship", 0),
    ("xs14_259606952", "cis loaf on loaf", 0),
    ("xs13_25960696", "beehive on loaf", 0),
    ("xs14_69606996", "beehive on pond", 0),
    ("xs10_25606a4", "trans bi-boat", 0),
    ("xs12_25606952", "cis boat on loaf", 0),
    ("xs11_25ac0cc", "block on long boat", 0),
    ("xs12_rrz66", "tri-block", 0),
    ("xs13_25ac0cic", "beehive on long boat", 0),
    ("xs16_699606996", "pond on pond", 0),
    ("xp2_2530318c", "cis boat on beacon", 0),
    ("xs12_3560696", "beehive on ship", 0),
    ("xs16_rr0rr", "2x2 block array", 0),
    ("xs11_33032ac", "block on eater tail", 0),
    ("xs14_2596069a4", "trans loaf on loaf", 0),
    ("xs14_35606996", "ship on pond", 0),
    ("xs15_259606996", "loaf on pond", 0),
    ("xp2_318c0cic", "beehive on beacon", 0),
    ("xs10_33039c", "trans block on aircraft carrier", 0),
    ("xs12_253035a4", "cis boat on long boat", 0),
    ("xp2_7", "blinker", 0),
    ("xs4_33", "block", 0),
    ("xs4_252", "tub", 0),
    ("xs5_253", "boat", 0),
    ("xs6_bd", "snake", 0),
    ("xs6_356", "ship", 0),
    ("xs6_696", "beehive", 0),
    ("xs6_25a4", "barge", 0),
    ("xs6_39c", "carrier", 0),
    ("xp2_7e", "toad", 0),
    ("xp2_318c", "beacon", 0),
    ("xs7_3lo", "long snake", 0),
    ("xs7_25ac", "long boat", 0),
    ("xs7_178c", "eater", 0),
    ("xs7_2596", "loaf", 0),
    ("xs8_178k8", "tub with tail", 0),
    ("xs8_32qk", "hook with tail", 0),
    ("xs8_69ic", "mango", 0),
    ("xs8_6996", "pond", 0),
    ("xs8_25ak8", "long barge", 0),
    ("xs8_3pm", "shillelagh", 0),
    ("xs8_312ko", "canoe", 0),
    ("xs8_31248c", "very long snake", 0),
    ("xs8_35ac", "long ship", 0),
    ("xs12_g8o653z11", "ship-tie", 0),
    ("xs14_g88m952z121", "half-bakery", 0),
    ("xs14_69bqic", "paperclip", 0),
    ("xs9_31ego", "integral sign", 0),
    ("xs10_g8o652z01", "boat-tie", 0),
    ("xs14_g88b96z123", "big s", 0),
    ("xs16_g88m996z1221", "bipond", 0),
    ("xs12_raar", "table on table", 0),
    ("xs9_4aar", "hat", 0),
    ("xs10_35ako", "very long ship", 0),
    ("xs9_178ko", "trans boat with tail", 0),
    ("xs15_354cgc453", "moose antlers", 0),
    ("xs14_6970796", "cis-mirrored bun", 0),
    ("xs10_32qr", "block on table", 0),
    ("xs16_j1u0696z11", "beehive on dock", 0),
    ("xs14_j1u066z11", "block on dock", 0),
    ("xs11_g8o652z11", "boat tie ship", 0),
    ("xs9_25ako", "very long boat", 0),
    ("xs16_69egmiczx1", "scorpion", 0),
    ("xs18_rhe0ehr", "dead spark coil", 0),
    ("xs17_2ege1ege2", "twin hat", 0),
    ("xs10_178kk8", "beehive with tail", 0),
    ("xs10_69ar", "loop", 0),
    ("xs14_69bo8a6", "fourteener", 0),
    ("xs14_39e0e93", "cis mirrored bookends", 0),
    ("xs9_178kc", "cis boat with tail", 0),
    ("xs12_330f96", "block and cap", 0),
    ("xs10_358gkc", "10.003", 0),
    ("xs12_330fho", "trans block and long bookend", 0),
    ("xs10_g0s252z11", "prodigal sign", 0),
    ("xs11_g0s453z11", "elevener", 0),
    ("xs14_6is079c", "cis-rotated hook", 0),
    ("xs14_69e0eic", "trans-mirrored bun", 0),
    ("xs11_ggm952z1", "trans loaf with tail", 0),
    ("xs15_j1u06a4z11", "cis boat and dock", 0),
    ("xs20_3lkkl3z32w23", "mirrored dock", 0),
    ("xs12_178br", "12.003", 0),
    ("xs12_3hu066", "cis block and longhook", 0),
    ("xs12_178c453", "eater with nine", 0),
    ("xs10_0drz32", "broken snake", 0),
    ("xs9_312453", "long shillelagh", 0),
    ("xs10_3215ac", "boat with long tail", 0),
    ("xs14_39e0e96", "cis-hook and R-bee", 0),
    ("xs13_g88m96z121", "beehive at loaf", 0),
    ("xs14_39e0eic", "trans hook and R-bee", 0),
    ("xs10_3542ac", "S-ten", 0),
    ("xs15_259e0eic", "trans R-bee and R-loaf", 0),
    ("xs11_178jd", "11-loop", 0),
    ("xs9_25a84c", "tub with long tail", 0),
    ("xs15_3lkm96z01", "bee-hat", 0),
    ("xs14_g8o0e96z121", "cis-rotated R-bee", 0),
    ("xs13_69e0mq", "R-bee and snake", 0),
    ("xs11_69lic", "11.003", 0),
    ("xs12_6960ui", "beehive and table", 0),
    ("xs16_259e0e952", "cis-mirrored R-loaf", 0),
    ("xs10_1784ko", "8-snake-eater", 0),
    ("xs13_4a960ui", "ortho loaf and table", 0),
    ("xs9_g0g853z11", "long canoe", 0),
    ("xs18_69is0si96", "[cis-mirrored R-mango]", 0),
    ("xs11_178kic", "cis loaf with tail", 0),
    ("xs16_69bob96", "symmetric scorpion", 0),
    ("xs13_0g8o653z121", "longboat on ship", 0),
    ("xs12_o4q552z01", "beehive at beehive", 0),
    ("xs10_ggka52z1", "trans barge with tail", 0),
    ("xs12_256o8a6", "eater on boat", 0),
    ("xs14_6960uic", "beehive with cap", 0),
    ("xs12_2egm93", "snorkel loop", 0),
    ("xs12_2egm96", "beehive bend tail", 0),
    ("xs11_g0s253z11", "trans boat with nine", 0),
    ("xs15_3lk453z121", "trans boat and dock", 0),
    ("xs19_69icw8ozxdd11", "[mango with block on dock]", 0),
    ("xs13_2530f96", "[cis boat and cap]", 0),
    ("xs11_2530f9", "cis boat and table", 0),
    ("xs14_4a9m88gzx121", "[bi-loaf2]", 0),
    ("xs11_ggka53z1", "trans longboat with tail", 0),
    ("xs18_2egm9a4zx346", "[loaf eater tail]", 0),
    ("xs15_4a9raic", "[15-bent-paperclip]", 0),
    ("xs11_3586246", "[11-snake]", 0),
    ("xs11_178b52", "[11-boat wrap tail]", 0),
    ("xs14_08u1e8z321", "[hat join hook]", 0),
    ("xs14_g4s079cz11", "[cis-mirrored offset hooks]", 0),
    ("xs13_31egma4", "[13-boat wrap eater]", 0),
    ("xs14_69960ui", "pond and table", 0),
    ("xs13_255q8a6", "[eater tie beehive]", 0),
    ("xs15_09v0ccz321", "[hook join table and block]", 0),
];

static REGISTRY: LazyLock<HashMap<&'static str, (&'static str, u64)>> = LazyLock::new(|| {
    COMMON_NAMES
        .iter()
        .map(|&(code, name, points)| (code, (name, points)))
        .collect()
});

/// Familiar name of an object, if it has one
pub fn common_name(code: &str) -> Option<&'static str> {
    REGISTRY.get(code).map(|&(name, _)| name)
}

/// Points a soup earns for producing one `code`
pub fn points(code: &ObjectCode) -> u64 {
    if let Some(&(_, points)) = REGISTRY.get(code.to_string().as_str()) {
        return points;
    }
    match code {
        ObjectCode::StillLife { population, .. } => (*population as u64).min(STILL_LIFE_CAP),
        ObjectCode::Oscillator { period: 2, .. } => P2_POINTS,
        ObjectCode::Oscillator { period: 3 | 4, .. } => P3_P4_POINTS,
        ObjectCode::Oscillator { .. } => OSCILLATOR_POINTS,
        ObjectCode::Spaceship { .. } => SPACESHIP_POINTS,
        ObjectCode::LinearGrowth { .. }
        | ObjectCode::PowerLawGrowth(_)
        | ObjectCode::Pathological
        | ObjectCode::Oversized(_)
        | ObjectCode::SpaceshipUnion { .. } => UNBOUNDED_POINTS,
    }
}
