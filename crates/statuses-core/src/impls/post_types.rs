//! StaticPostTypes - 固定リストの PostTypeRegistry

use crate::ports::PostTypeRegistry;

/// A registry whose post types are known up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPostTypes {
    post_types: Vec<String>,
}

impl StaticPostTypes {
    pub fn new<I, S>(post_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        post_types.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StaticPostTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut post_types: Vec<String> = Vec::new();
        for post_type in iter {
            let post_type = post_type.into();
            if !post_types.contains(&post_type) {
                post_types.push(post_type);
            }
        }
        Self { post_types }
    }
}

impl PostTypeRegistry for StaticPostTypes {
    fn registered_post_types(&self) -> Vec<String> {
        self.post_types.clone()
    }
}
