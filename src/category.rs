//! Task categories

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId {
    content: Uuid,
}
impl CategoryId {
    /// Generate a random CategoryId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}
impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}


/// A category tasks can be sorted into.
///
/// Tasks refer to categories by name. Several categories may share the same name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self { id: CategoryId::random(), name }
    }

    pub fn id(&self) -> &CategoryId { &self.id   }
    pub fn name(&self) -> &str      { &self.name }

    pub(crate) fn set_name(&mut self, new_name: String) {
        self.name = new_name;
    }
}
