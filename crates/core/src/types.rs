//! Value types shared with the category autocomplete control

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entry offered by the autocomplete control
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutocompleteItem {
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl AutocompleteItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

type ResolveFn = Box<dyn FnOnce(AutocompleteItem)>;
type RejectFn = Box<dyn FnOnce()>;

/// Pending request from the user to create a new category.
///
/// The handler settles it by calling either [`resolve`](Self::resolve) or
/// [`reject`](Self::reject); both consume the event.
pub struct CreateCategoryEvent {
    text: String,
    resolve: ResolveFn,
    reject: RejectFn,
}

impl CreateCategoryEvent {
    pub fn new(
        text: impl Into<String>,
        resolve: impl FnOnce(AutocompleteItem) + 'static,
        reject: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            text: text.into(),
            resolve: Box::new(resolve),
            reject: Box::new(reject),
        }
    }

    /// Text the user typed for the new category
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn resolve(self, item: AutocompleteItem) {
        tracing::debug!(text = %self.text, id = %item.id, "Category created");
        (self.resolve)(item);
    }

    pub fn reject(self) {
        tracing::debug!(text = %self.text, "Category creation rejected");
        (self.reject)();
    }
}

impl fmt::Debug for CreateCategoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateCategoryEvent")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn tracked_event(text: &str) -> (CreateCategoryEvent, Rc<RefCell<Vec<AutocompleteItem>>>, Rc<Cell<u32>>) {
        let resolved = Rc::new(RefCell::new(Vec::new()));
        let rejected = Rc::new(Cell::new(0));
        let event = {
            let resolved = resolved.clone();
            let rejected = rejected.clone();
            CreateCategoryEvent::new(
                text,
                move |item| resolved.borrow_mut().push(item),
                move || rejected.set(rejected.get() + 1),
            )
        };
        (event, resolved, rejected)
    }

    #[test]
    fn test_resolve_delivers_item() {
        let (event, resolved, rejected) = tracked_event("Fruit");
        assert_eq!(event.text(), "Fruit");

        event.resolve(AutocompleteItem::new("1", "Fruit", "apple"));

        assert_eq!(
            *resolved.borrow(),
            vec![AutocompleteItem {
                id: "1".to_string(),
                label: "Fruit".to_string(),
                icon: "apple".to_string(),
            }]
        );
        assert_eq!(rejected.get(), 0);
    }

    #[test]
    fn test_reject() {
        let (event, resolved, rejected) = tracked_event("Vegetables");

        event.reject();

        assert!(resolved.borrow().is_empty());
        assert_eq!(rejected.get(), 1);
    }

    #[test]
    fn test_autocomplete_item_json() {
        let item: AutocompleteItem =
            serde_json::from_str(r#"{"id":"7","label":"Tools","icon":"hammer"}"#).unwrap();
        assert_eq!(item, AutocompleteItem::new("7", "Tools", "hammer"));
    }
}
