use crate::score::{ScoreRecord, split_codes};

/// Query body matching plays without mods.
pub const NO_MOD_BODY: &str = "nm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModOperator {
    /// `+`: every queried mod is set
    Include,
    /// `-`: not every queried mod is set
    Exclude,
    /// `*`: the mod set equals the queried set
    Exact,
}

impl ModOperator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Include),
            '-' => Some(Self::Exclude),
            '*' => Some(Self::Exact),
            _ => None,
        }
    }
}

/// A parsed mod term such as `+hdhr`, `-dt`, `*nm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModFilter {
    pub operator: ModOperator,
    pub body: ModBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModBody {
    NoMod,
    /// Lower-case two-character codes; an odd trailing character is dropped
    Codes(Vec<String>),
}

impl ModFilter {
    /// Parse a mod term. Returns `None` unless it is an operator followed by a body.
    pub fn parse(term: &str) -> Option<Self> {
        let mut chars = term.chars();
        let operator = chars.next().and_then(ModOperator::from_char)?;
        let body = chars.as_str();
        if body.is_empty() {
            return None;
        }

        let body = if body == NO_MOD_BODY {
            ModBody::NoMod
        } else {
            ModBody::Codes(split_codes(&body.to_lowercase()))
        };
        Some(Self { operator, body })
    }

    pub fn matches(&self, score: &ScoreRecord) -> bool {
        match &self.body {
            ModBody::NoMod => {
                let no_mods = score.mods.bits() == 0;
                match self.operator {
                    ModOperator::Include | ModOperator::Exact => no_mods,
                    ModOperator::Exclude => !no_mods,
                }
            }
            ModBody::Codes(queried) => {
                let actual = score.mods.codes();
                let all_present = queried.iter().all(|code| actual.contains(code));
                match self.operator {
                    ModOperator::Include => all_present,
                    ModOperator::Exclude => !all_present,
                    ModOperator::Exact => {
                        let mut queried = queried.clone();
                        let mut actual = actual;
                        queried.sort();
                        actual.sort();
                        queried == actual
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Mods;

    fn score(mods: Mods) -> ScoreRecord {
        ScoreRecord {
            mods,
            ..Default::default()
        }
    }

    fn matches(term: &str, mods: Mods) -> bool {
        ModFilter::parse(term).unwrap().matches(&score(mods))
    }

    #[test]
    fn test_parse() {
        let filter = ModFilter::parse("+hdhr").unwrap();
        assert_eq!(filter.operator, ModOperator::Include);
        assert_eq!(
            filter.body,
            ModBody::Codes(vec!["hd".to_string(), "hr".to_string()])
        );
        assert_eq!(ModFilter::parse("*nm").unwrap().body, ModBody::NoMod);
        assert!(ModFilter::parse("+").is_none());
        assert!(ModFilter::parse("hd").is_none());
    }

    #[test]
    fn test_parse_drops_odd_tail() {
        let filter = ModFilter::parse("+hdh").unwrap();
        assert_eq!(filter.body, ModBody::Codes(vec!["hd".to_string()]));
    }

    #[test]
    fn test_include() {
        let hdhrdt = Mods::Hidden | Mods::HardRock | Mods::DoubleTime;
        assert!(matches("+hdhr", hdhrdt));
        assert!(matches("+hrhd", hdhrdt));
        assert!(!matches("+hdhr", Mods::Hidden));
    }

    #[test]
    fn test_exclude_is_not_all_present() {
        assert!(matches("-hd", Mods::HardRock));
        assert!(!matches("-hd", Mods::Hidden | Mods::HardRock));
        // only one of the two queried mods is missing, which is enough
        assert!(matches("-hdhr", Mods::Hidden));
        assert!(!matches("-hdhr", Mods::Hidden | Mods::HardRock));
    }

    #[test]
    fn test_exact() {
        assert!(matches("*hd", Mods::Hidden));
        assert!(!matches("*hd", Mods::Hidden | Mods::HardRock));
        assert!(matches("*hrhd", Mods::Hidden | Mods::HardRock));
    }

    #[test]
    fn test_nightcore_does_not_report_double_time() {
        let nc = Mods::DoubleTime | Mods::Nightcore;
        assert!(matches("+nc", nc));
        assert!(!matches("+dt", nc));
        assert!(matches("*nc", nc));
    }

    #[test]
    fn test_no_mod() {
        assert!(matches("+nm", Mods::empty()));
        assert!(!matches("+nm", Mods::Hidden));
        assert!(matches("*nm", Mods::empty()));
        assert!(matches("-nm", Mods::Hidden));
        assert!(!matches("-nm", Mods::empty()));
    }

    #[test]
    fn test_no_mod_play_against_code_terms() {
        // The no-mod label still yields codes, so an empty exact body does not match
        assert!(!matches("*h", Mods::empty()));
        assert!(!matches("+hd", Mods::empty()));
        assert!(matches("-hd", Mods::empty()));
    }
}
