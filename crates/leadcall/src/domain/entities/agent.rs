//! Agent Directory
//!
//! The sales agents a lead can be routed to, loaded once at startup.

use rand::Rng;

use crate::domain::errors::DomainError;

/// Ordered, non-empty list of agent contact identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDirectory {
    agents: Vec<String>,
}

impl AgentDirectory {
    /// Build a directory from identifiers
    ///
    /// Fails when the list is empty, since no lead could ever be routed.
    pub fn new(agents: Vec<String>) -> Result<Self, DomainError> {
        if agents.is_empty() {
            return Err(DomainError::Configuration(
                "agent directory must contain at least one number".to_string(),
            ));
        }
        Ok(Self { agents })
    }

    /// Parse a comma-separated list such as `+31600000001,+31600000002`
    ///
    /// Surrounding whitespace is stripped and blank entries are skipped.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let agents = raw
            .split(',')
            .map(str::trim)
            .filter(|agent| !agent.is_empty())
            .map(String::from)
            .collect();
        Self::new(agents)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the directory has no agents
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Draw an index uniformly from `0..=len-1`
    pub fn pick_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..=self.agents.len() - 1)
    }

    /// Pick an agent using the given random source
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.agents[self.pick_index(rng)]
    }

    /// Pick an agent using the thread-local random source
    pub fn pick(&self) -> &str {
        self.pick_with(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_comma_separated() {
        let directory = AgentDirectory::parse("+31600000001,+31600000002").unwrap();
        assert_eq!(directory.agents(), ["+31600000001", "+31600000002"]);
        assert!(!directory.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_entries() {
        let directory = AgentDirectory::parse(" +31600000001 , ,+31600000002,").unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.agents()[0], "+31600000001");
    }

    #[test]
    fn test_empty_directory_is_rejected() {
        assert!(matches!(
            AgentDirectory::parse(""),
            Err(DomainError::Configuration(_))
        ));
        assert!(matches!(
            AgentDirectory::parse(" , ,"),
            Err(DomainError::Configuration(_))
        ));
        assert!(AgentDirectory::new(Vec::new()).is_err());
    }

    #[test]
    fn test_single_agent_always_picked() {
        let directory = AgentDirectory::parse("+10000000001").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(directory.pick_with(&mut rng), "+10000000001");
        }
        assert_eq!(directory.pick(), "+10000000001");
    }

    #[test]
    fn test_pick_index_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..=8 {
            let agents = (0..n).map(|i| format!("+1000000000{i}")).collect();
            let directory = AgentDirectory::new(agents).unwrap();
            for _ in 0..1_000 {
                assert!(directory.pick_index(&mut rng) < n);
            }
        }
    }

    #[test]
    fn test_pick_is_roughly_uniform() {
        let directory = AgentDirectory::parse("a,b,c,d").unwrap();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [0usize; 4];
        let trials = 40_000;

        for _ in 0..trials {
            counts[directory.pick_index(&mut rng)] += 1;
        }

        // Expected 10_000 each; allow 5% deviation
        for count in counts {
            assert!((9_500..=10_500).contains(&count), "counts: {counts:?}");
        }
    }

    #[test]
    fn test_both_endpoints_reachable() {
        let directory = AgentDirectory::parse("first,middle,last").unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let picks: Vec<&str> = (0..500).map(|_| directory.pick_with(&mut rng)).collect();
        assert!(picks.contains(&"first"));
        assert!(picks.contains(&"last"));
    }
}
