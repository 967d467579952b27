use crate::errors::{BattleEngineError, BattleResult};
use crate::pokemon::Combatant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the battle an action or command refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// An ordered, non-empty line-up plus the slot currently fighting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    members: Vec<Combatant>,
    active_index: usize,
}

impl Team {
    pub fn new(members: Vec<Combatant>) -> BattleResult<Self> {
        if members.is_empty() {
            return Err(BattleEngineError::EmptyTeam);
        }
        Ok(Self {
            members,
            active_index: 0,
        })
    }

    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Get the currently active combatant
    pub fn active(&self) -> Option<&Combatant> {
        self.members.get(self.active_index)
    }

    /// Get the currently active combatant mutably
    pub fn active_mut(&mut self) -> Option<&mut Combatant> {
        self.members.get_mut(self.active_index)
    }

    /// Index of the first conscious member after the active one, in list order.
    fn next_conscious_index(&self) -> Option<usize> {
        self.members
            .iter()
            .enumerate()
            .skip(self.active_index + 1)
            .find(|(_, member)| !member.is_fainted())
            .map(|(index, _)| index)
    }

    /// The next member able to fight. Members already at 0 HP are skipped.
    pub fn next_in_line(&self) -> Option<&Combatant> {
        self.next_conscious_index().map(|index| &self.members[index])
    }

    /// Move the active slot to [`Team::next_in_line`]. Returns false if there is none.
    pub fn advance(&mut self) -> bool {
        match self.next_conscious_index() {
            Some(index) => {
                self.active_index = index;
                true
            }
            None => false,
        }
    }

    pub fn has_conscious_members(&self) -> bool {
        self.members.iter().any(|member| !member.is_fainted())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            let marker = if i == self.active_index { " (Active)" } else { "" };
            let fainted = if member.is_fainted() { " (Fainted)" } else { "" };
            writeln!(f, " {}. {}{}{}", i + 1, member, marker, fainted)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::MoveSlot;
    use schema::{BaseStats, PokemonType};

    fn member(name: &str) -> Combatant {
        Combatant::new(
            0,
            name,
            vec![PokemonType::Normal],
            BaseStats::uniform(50),
            100,
            vec![MoveSlot::new("tackle")],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_team_is_rejected() {
        assert_eq!(Team::new(vec![]), Err(BattleEngineError::EmptyTeam));
    }

    #[test]
    fn test_advance_walks_list_order() {
        let mut team = Team::new(vec![member("a"), member("b")]).unwrap();
        assert_eq!(team.active().map(|c| c.name.as_str()), Some("a"));
        assert_eq!(team.next_in_line().map(|c| c.name.as_str()), Some("b"));

        assert!(team.advance());
        assert_eq!(team.active_index(), 1);
        assert!(team.next_in_line().is_none());
        assert!(!team.advance());
        assert_eq!(team.active_index(), 1);
    }

    #[test]
    fn test_advance_skips_fainted_members() {
        let fainted = member("b").with_current_hp(0);
        let mut team = Team::new(vec![member("a"), fainted, member("c")]).unwrap();
        assert_eq!(team.next_in_line().map(|c| c.name.as_str()), Some("c"));

        assert!(team.advance());
        assert_eq!(team.active_index(), 2);

        let mut exhausted = Team::new(vec![member("a"), member("b").with_current_hp(0)]).unwrap();
        assert!(exhausted.next_in_line().is_none());
        assert!(!exhausted.advance());
        assert_eq!(exhausted.active_index(), 0);
    }

    #[test]
    fn test_has_conscious_members() {
        let mut team = Team::new(vec![member("a")]).unwrap();
        assert!(team.has_conscious_members());
        team.active_mut().unwrap().take_damage(100);
        assert!(!team.has_conscious_members());
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Opponent);
        assert_eq!(Side::Opponent.opponent(), Side::Player);
    }
}
