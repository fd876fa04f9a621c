//! The task catalog: the set of completable daily tasks.

use serde::{Deserialize, Serialize};

use super::constants::{TASK_EXP_MAX, TASK_EXP_MIN};
use crate::error::{Error, Result};

/// Task difficulty, scaling the EXP a completion awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Common,
        Difficulty::Rare,
        Difficulty::Epic,
        Difficulty::Legendary,
    ];

    /// EXP multiplier applied to a task's base EXP.
    pub fn multiplier(&self) -> f64 {
        match self {
            Difficulty::Common => 1.0,
            Difficulty::Rare => 1.5,
            Difficulty::Epic => 2.5,
            Difficulty::Legendary => 5.0,
        }
    }

    /// Stable string id, as persisted in save files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Common => "common",
            Difficulty::Rare => "rare",
            Difficulty::Epic => "epic",
            Difficulty::Legendary => "legendary",
        }
    }

    /// Parses a string id back to a difficulty.
    pub fn from_str(s: &str) -> Option<Difficulty> {
        match s {
            "common" => Some(Difficulty::Common),
            "rare" => Some(Difficulty::Rare),
            "epic" => Some(Difficulty::Epic),
            "legendary" => Some(Difficulty::Legendary),
            _ => None,
        }
    }
}

/// Task category, used for grouping in statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fitness,
    Learning,
    Wellness,
    Productivity,
    Mindfulness,
    Creativity,
    Social,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Fitness,
        Category::Learning,
        Category::Wellness,
        Category::Productivity,
        Category::Mindfulness,
        Category::Creativity,
        Category::Social,
    ];

    /// Stable string id, as persisted in save files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fitness => "fitness",
            Category::Learning => "learning",
            Category::Wellness => "wellness",
            Category::Productivity => "productivity",
            Category::Mindfulness => "mindfulness",
            Category::Creativity => "creativity",
            Category::Social => "social",
        }
    }

    /// Parses a string id back to a category.
    pub fn from_str(s: &str) -> Option<Category> {
        match s {
            "fitness" => Some(Category::Fitness),
            "learning" => Some(Category::Learning),
            "wellness" => Some(Category::Wellness),
            "productivity" => Some(Category::Productivity),
            "mindfulness" => Some(Category::Mindfulness),
            "creativity" => Some(Category::Creativity),
            "social" => Some(Category::Social),
            _ => None,
        }
    }

    /// Display icon for the category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Fitness => "🏋️",
            Category::Learning => "📚",
            Category::Wellness => "💪",
            Category::Productivity => "⚙️",
            Category::Mindfulness => "🧠",
            Category::Creativity => "🎨",
            Category::Social => "👥",
        }
    }
}

/// A completable daily task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub difficulty: Difficulty,
    /// Base EXP before the difficulty multiplier.
    pub exp: u64,
    pub category: Category,
}

impl Task {
    /// EXP a completion of this task awards. The multiplied value
    /// truncates toward zero, so a rare task with 35 base EXP pays 52.
    pub fn exp_reward(&self) -> u64 {
        (self.exp as f64 * self.difficulty.multiplier()) as u64
    }
}

/// The mutable set of tasks. Ids are assigned above the current maximum
/// and are unique within the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed catalog, restored on reset.
    pub fn default_tasks() -> TaskCatalog {
        let tasks = vec![
            Task {
                id: 1,
                name: "🏃 Morning Run".to_string(),
                difficulty: Difficulty::Common,
                exp: 15,
                category: Category::Fitness,
            },
            Task {
                id: 2,
                name: "📚 Read 30 Minutes".to_string(),
                difficulty: Difficulty::Common,
                exp: 20,
                category: Category::Learning,
            },
            Task {
                id: 3,
                name: "🧘 Meditation".to_string(),
                difficulty: Difficulty::Common,
                exp: 18,
                category: Category::Wellness,
            },
            Task {
                id: 4,
                name: "💻 Code/Work on Project".to_string(),
                difficulty: Difficulty::Rare,
                exp: 50,
                category: Category::Productivity,
            },
            Task {
                id: 5,
                name: "🎓 Learn New Skill".to_string(),
                difficulty: Difficulty::Epic,
                exp: 75,
                category: Category::Learning,
            },
            Task {
                id: 6,
                name: "🥗 Eat Healthy Meal".to_string(),
                difficulty: Difficulty::Common,
                exp: 12,
                category: Category::Wellness,
            },
            Task {
                id: 7,
                name: "💧 Drink 8 Glasses Water".to_string(),
                difficulty: Difficulty::Common,
                exp: 10,
                category: Category::Wellness,
            },
            Task {
                id: 8,
                name: "✍️ Journal/Reflect".to_string(),
                difficulty: Difficulty::Rare,
                exp: 35,
                category: Category::Mindfulness,
            },
            Task {
                id: 9,
                name: "🎨 Creative Work".to_string(),
                difficulty: Difficulty::Epic,
                exp: 70,
                category: Category::Creativity,
            },
            Task {
                id: 10,
                name: "🤝 Help Someone".to_string(),
                difficulty: Difficulty::Rare,
                exp: 40,
                category: Category::Social,
            },
        ];
        TaskCatalog { tasks }
    }

    /// Looks up a task by id.
    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Iterates tasks in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The id the next added task will take: one above the current
    /// maximum, or 1 for an empty catalog.
    pub fn next_id(&self) -> u32 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    /// Validates and adds a task, returning the created entry.
    pub fn add(
        &mut self,
        name: &str,
        difficulty: Difficulty,
        exp: u64,
        category: Category,
    ) -> Result<Task> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("task name cannot be empty".to_string()));
        }
        if !(TASK_EXP_MIN..=TASK_EXP_MAX).contains(&exp) {
            return Err(Error::InvalidInput(format!(
                "base EXP must be between {} and {}",
                TASK_EXP_MIN, TASK_EXP_MAX
            )));
        }

        let task = Task {
            id: self.next_id(),
            name: name.to_string(),
            difficulty,
            exp,
            category,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Removes a task by id, returning it. Ledger history referencing
    /// the id stays in place, so callers that resolve historic ids must
    /// tolerate misses.
    pub fn remove(&mut self, id: u32) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }
}
