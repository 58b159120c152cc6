use super::{sum::Sum, value_::Value};
use fnv::FnvHashMap;
use std::fmt::{self, Debug, Formatter};

pub type Handler<'a, R> = Box<dyn Fn(&Sum, &[Value]) -> R + 'a>;

/// Handlers for case analysis keyed by variant name.
///
/// Each handler receives the fields of a value in declaration order. Handlers
/// added with [`case_with_receiver`](Handlers::case_with_receiver) also
/// receive the value itself.
pub struct Handlers<'a, R> {
    cases: FnvHashMap<String, Handler<'a, R>>,
}

impl<'a, R> Handlers<'a, R> {
    pub fn new() -> Self {
        Self {
            cases: FnvHashMap::default(),
        }
    }

    pub fn case(mut self, name: impl Into<String>, handler: impl Fn(&[Value]) -> R + 'a) -> Self {
        self.insert(name, handler);
        self
    }

    pub fn case_with_receiver(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&Sum, &[Value]) -> R + 'a,
    ) -> Self {
        self.insert_with_receiver(name, handler);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, handler: impl Fn(&[Value]) -> R + 'a) {
        self.insert_with_receiver(name, move |_: &Sum, fields: &[Value]| handler(fields));
    }

    pub fn insert_with_receiver(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&Sum, &[Value]) -> R + 'a,
    ) {
        self.cases.insert(name.into(), Box::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<&Handler<'a, R>> {
        self.cases.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cases.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<'a, R> Default for Handlers<'a, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> Debug for Handlers<'a, R> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter
            .debug_set()
            .entries(self.cases.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;
    use pretty_assertions::assert_eq;

    fn counter(count: i64) -> Sum {
        let type_ = types::Sum::new([("Counter", vec!["count"]), ("Stopped", vec![])]).unwrap();

        Sum::new(type_.variant("Counter").unwrap(), vec![count.into()])
    }

    #[test]
    fn replace_handler() {
        let mut handlers = Handlers::new().case("Counter", |_| 1);

        handlers.insert("Counter", |_| 2);

        assert_eq!(handlers.len(), 1);
        assert_eq!(counter(0).cata(&handlers), Ok(2));
    }

    #[test]
    fn borrow_environment() {
        let offset = 10;
        let handlers = Handlers::new().case("Counter", |fields: &[Value]| {
            fields[0].to_integer().unwrap_or_default() + offset
        });

        assert_eq!(counter(1).cata(&handlers), Ok(11));
        assert!(!handlers.contains("Stopped"));
    }

    #[test]
    fn pass_receiver() {
        let value = counter(3);
        let handlers = Handlers::new()
            .case_with_receiver("Counter", |receiver: &Sum, fields: &[Value]| {
                (receiver.clone(), fields.to_vec())
            })
            .case("Stopped", |_| unreachable!());

        let (receiver, fields) = value.cata(&handlers).unwrap();

        assert_eq!(receiver, value);
        assert_eq!(receiver.tag(), "Counter");
        assert_eq!(fields, [Value::from(3)]);
    }

    #[test]
    fn replace_receiver_handler_with_plain_handler() {
        let mut handlers =
            Handlers::new().case_with_receiver("Counter", |receiver: &Sum, _: &[Value]| {
                receiver.tag().to_owned()
            });

        handlers.insert("Counter", |_| "plain".to_owned());

        assert_eq!(counter(0).cata(&handlers), Ok("plain".to_owned()));
    }
}
