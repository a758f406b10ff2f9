//! Built-in example catalogs, ready to load into a session.

pub const BASIC_INSTRUMENTS: &str = "\
INSTRUMENT TYPE: STRING, WIND, PERCUSSION
CONTROL GESTURE: PLUCKING, BOWING, STRIKING
MATERIAL: WOOD, METAL, SYNTHETIC
MUSICAL CONTEXT: CLASSICAL, JAZZ, FOLK";

pub const BODY_INTERACTION: &str = "\
INSTRUMENT TYPE: ELECTRONIC, PERCUSSION, WIND
INTERACTION METHOD: HANDS, FEET, BODY MOVEMENT
POSTURE: SEATED, STANDING, MOVING
SOUND MODULATION: PITCH BENDING, VIBRATO, DYNAMICS CONTROL";

pub const EXTENDED_PALETTE: &str = "\
MATERIAL: WOOD, METAL, SYNTHETIC, MIXED
CONTROL GESTURE: PLUCKING, BOWING, STRIKING, BLOWING
SOUND MODULATION: FILTERING, VIBRATO, PITCH BENDING
MUSICAL CONTEXT: ELECTRONIC, ROCK, JAZZ, CLASSICAL";

/// Look up a sample by its 1-based number, as shown in help text.
pub fn sample(number: usize) -> Option<&'static str> {
    match number {
        1 => Some(BASIC_INSTRUMENTS),
        2 => Some(BODY_INTERACTION),
        3 => Some(EXTENDED_PALETTE),
        _ => None,
    }
}
