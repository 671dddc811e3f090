use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Legacy gameplay modifier bitset.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Mods: u32 {
        const NoFail = 1 << 0;
        const Easy = 1 << 1;
        const TouchDevice = 1 << 2;
        const Hidden = 1 << 3;
        const HardRock = 1 << 4;
        const SuddenDeath = 1 << 5;
        const DoubleTime = 1 << 6;
        const Relax = 1 << 7;
        const HalfTime = 1 << 8;
        /// Always set together with `DoubleTime`
        const Nightcore = 1 << 9;
        const Flashlight = 1 << 10;
        const Autoplay = 1 << 11;
        const SpunOut = 1 << 12;
        const Autopilot = 1 << 13;
        const Perfect = 1 << 14;
        const Key4 = 1 << 15;
        const Key5 = 1 << 16;
        const Key6 = 1 << 17;
        const Key7 = 1 << 18;
        const Key8 = 1 << 19;
        const FadeIn = 1 << 20;
        const Random = 1 << 21;
        const Cinema = 1 << 22;
        const Target = 1 << 23;
        const Key9 = 1 << 24;
        const KeyCoop = 1 << 25;
        const Key1 = 1 << 26;
        const Key3 = 1 << 27;
        const Key2 = 1 << 28;
        const ScoreV2 = 1 << 29;
        const Mirror = 1 << 30;
    }
}

/// Display names in ascending bit order.
const MOD_NAMES: [(Mods, &str); 31] = [
    (Mods::NoFail, "NF"),
    (Mods::Easy, "EZ"),
    (Mods::TouchDevice, "TD"),
    (Mods::Hidden, "HD"),
    (Mods::HardRock, "HR"),
    (Mods::SuddenDeath, "SD"),
    (Mods::DoubleTime, "DT"),
    (Mods::Relax, "RX"),
    (Mods::HalfTime, "HT"),
    (Mods::Nightcore, "NC"),
    (Mods::Flashlight, "FL"),
    (Mods::Autoplay, "Autoplay"),
    (Mods::SpunOut, "SO"),
    (Mods::Autopilot, "AP"),
    (Mods::Perfect, "PF"),
    (Mods::Key4, "Key4"),
    (Mods::Key5, "Key5"),
    (Mods::Key6, "Key6"),
    (Mods::Key7, "Key7"),
    (Mods::Key8, "Key8"),
    (Mods::FadeIn, "Fade In"),
    (Mods::Random, "Random"),
    (Mods::Cinema, "Cinema"),
    (Mods::Target, "Target"),
    (Mods::Key9, "Key9"),
    (Mods::KeyCoop, "KeyCoop"),
    (Mods::Key1, "Key1"),
    (Mods::Key3, "Key3"),
    (Mods::Key2, "Key2"),
    (Mods::ScoreV2, "ScoreV2"),
    (Mods::Mirror, "Mirror"),
];

pub const NO_MOD_LABEL: &str = "No Mod";

impl Mods {
    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Names of the set mods. Nightcore hides the double-time it implies.
    pub fn names(&self) -> Vec<&'static str> {
        let nightcore = self.contains(Mods::Nightcore);
        MOD_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .filter(|(flag, _)| !(nightcore && *flag == Mods::DoubleTime))
            .map(|(_, name)| *name)
            .collect()
    }

    /// Concatenated mod names, e.g. `HDHR`, or `No Mod`.
    pub fn display(&self) -> String {
        let names = self.names();
        if names.is_empty() {
            NO_MOD_LABEL.to_string()
        } else {
            names.concat()
        }
    }

    /// Lower-case two-character codes used by mod queries.
    ///
    /// Codes are chunks of the display label, so long names and the no-mod
    /// label split like any other text (`autoplay` -> `au`, `to`, `pl`, `ay`).
    pub fn codes(&self) -> Vec<String> {
        split_codes(&self.display().to_lowercase())
    }
}

/// Split text into consecutive two-character codes, dropping an odd trailing character.
pub fn split_codes(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks_exact(2)
        .map(|pair| pair.iter().collect())
        .collect()
}

impl Serialize for Mods {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Mods {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Mods::from_bits_retain)
    }
}

impl std::fmt::Display for Mods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
