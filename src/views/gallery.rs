use crate::models::PLACEHOLDER_IMAGE;

/// Image carousel on the detail page
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery<'a> {
    images: &'a [String],
    index: usize,
}

impl<'a> Gallery<'a> {
    pub fn new(images: &'a [String]) -> Self {
        Self { images, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current image, or the placeholder when there is nothing to show
    pub fn current(&self) -> &'a str {
        match self.images.get(self.index) {
            Some(src) if !src.trim().is_empty() => src,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    pub fn next(&mut self) -> &'a str {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
        self.current()
    }

    pub fn previous(&mut self) -> &'a str {
        if !self.images.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.images.len() - 1);
        }
        self.current()
    }
}
