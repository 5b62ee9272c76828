// Custom types that are widely used are defined here.

// Identifier types. These come from the backend as opaque strings.
pub type TournamentId = String;
pub type TeamId = String;

// A single letter in practice ("A", "B"...), kept as a string for the backend.
pub type GroupLabel = String;

// Matchday ("jornada") labels start from 1.
pub type Matchday = u32;

// Hard limits for one tournament.
pub const MAX_TEAMS: usize = 32;
pub const MAX_GROUPS: usize = 8;

// Type conversions.
pub mod convert {
    // Convert between integers. Only used where the value is bounded by the tournament limits.
    pub fn int<N1: Copy + std::fmt::Display, N2: TryFrom<N1>>(num: N1) -> N2 {
        match num.try_into() {
            Ok(n) => n,
            Err(_) => panic!("num: {num}")
        }
    }

    // Group label for a zero-based group index. 0 -> "A".
    pub fn group_label(index: usize) -> String {
        let offset: u8 = int(index % 26);
        char::from(b'A' + offset).to_string()
    }
}
