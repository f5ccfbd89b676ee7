use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub name: String,
    pub count: usize,
}

impl CategoryStat {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }

    /// Share of `total`, as a whole percentage.
    pub fn percentage_of(&self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            self.count * 100 / total
        }
    }
}
