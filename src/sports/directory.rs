use crate::error::ReportError;
use report_api::Team;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A league's teams, indexed by abbreviation.
#[derive(Debug, Default)]
pub struct TeamDirectory {
    teams: HashMap<String, Team>,
}

impl TeamDirectory {
    /// Index `teams` by abbreviation. Two teams sharing an abbreviation is a
    /// provider error; neither is kept.
    pub fn build(teams: Vec<Team>) -> Result<Self, ReportError> {
        let mut index = HashMap::with_capacity(teams.len());
        for team in teams {
            match index.entry(team.abbreviation.clone()) {
                Entry::Occupied(_) => {
                    return Err(ReportError::DuplicateAbbreviation {
                        abbreviation: team.abbreviation,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(team);
                }
            }
        }
        Ok(Self { teams: index })
    }

    pub fn get(&self, abbreviation: &str) -> Option<&Team> {
        self.teams.get(abbreviation)
    }

    /// Like [`get`](Self::get), but a miss is an error naming the abbreviation.
    pub fn require(&self, abbreviation: &str) -> Result<&Team, ReportError> {
        self.get(abbreviation).ok_or_else(|| ReportError::UnknownTeam {
            abbreviation: abbreviation.to_owned(),
        })
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(abbr: &str) -> Team {
        Team {
            abbreviation: abbr.into(),
            name: format!("{abbr} Team"),
            ..Default::default()
        }
    }

    #[test]
    fn unique_abbreviations_are_all_indexed() {
        let dir = TeamDirectory::build(vec![team("SF"), team("KC"), team("DAL")]).unwrap();
        assert_eq!(dir.len(), 3);
        assert_eq!(dir.get("KC").map(|t| t.name.as_str()), Some("KC Team"));
        assert!(dir.get("NYG").is_none());
    }

    #[test]
    fn duplicate_abbreviation_is_rejected() {
        let err = TeamDirectory::build(vec![team("SF"), team("KC"), team("SF")]).unwrap_err();
        assert_eq!(err, ReportError::DuplicateAbbreviation { abbreviation: "SF".into() });
    }

    #[test]
    fn empty_league_builds_an_empty_directory() {
        let dir = TeamDirectory::build(Vec::new()).unwrap();
        assert!(dir.is_empty());
        assert_eq!(dir.len(), 0);
    }

    #[test]
    fn require_names_the_missing_team() {
        let dir = TeamDirectory::build(vec![team("SF")]).unwrap();
        assert!(dir.require("SF").is_ok());
        assert_eq!(
            dir.require("LV").unwrap_err(),
            ReportError::UnknownTeam { abbreviation: "LV".into() }
        );
    }
}
