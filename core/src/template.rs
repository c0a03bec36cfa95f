//! HTML string templating.
//!
//! The renderer is the typed rendition of a tagged template: static string
//! fragments interleaved with interpolated values, where falsy placeholder
//! values vanish from the output. Instead of duck-typing the values, the
//! renderer works over a closed [`Node`] variant and matches exhaustively.
//!
//! Conversions encode the filtering rules: booleans collapse to
//! [`Node::Empty`] in either polarity (which is how conditional attributes
//! like `checked` and conditional blocks work), `None` collapses the same
//! way, and integers render through their decimal form so `0` survives as
//! `"0"`.
//!
//! No HTML escaping is performed. Interpolated values are trusted verbatim;
//! see DESIGN.md for the record on that decision.

/// A renderable fragment of output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Renders as nothing. Booleans and `None` collapse here.
    Empty,

    /// Verbatim text or markup, emitted without escaping.
    Text(String),

    /// Children rendered in order and concatenated. This is what makes
    /// component composition work: a list view maps its items to nodes and
    /// interpolates the sequence as a single value.
    Sequence(Vec<Node>),
}

impl Node {
    /// Convenience constructor for [`Node::Text`].
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Convenience constructor for [`Node::Sequence`].
    pub fn seq(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(children.into_iter().collect())
    }

    /// Conditional markup: keeps `node` when `cond` holds, vanishes
    /// otherwise. The typed form of the `cond && markup` idiom.
    pub fn when(cond: bool, node: impl Into<Node>) -> Self {
        if cond { node.into() } else { Node::Empty }
    }

    /// Renders this node to a string.
    ///
    /// Rendering is pure: the same node always yields the same string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text(text) => out.push_str(text),
            Node::Sequence(children) => {
                for child in children {
                    child.render_into(out);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

// Both polarities vanish: a bare boolean placeholder never reaches the
// output, only the markup it guards does.
impl From<bool> for Node {
    fn from(_: bool) -> Self {
        Node::Empty
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Empty, Into::into)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::Sequence(children)
    }
}

macro_rules! node_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Text(value.to_string())
                }
            }
        )*
    };
}

node_from_integer!(usize, u32, u64, i32, i64);

/// Interleaves static fragments with rendered values.
///
/// Produces `fragment[0] value[0] fragment[1] value[1] ...` - the contract
/// is `values.len() == fragments.len() - 1`, matching a tagged template.
/// The interleave zips: with fewer values the remaining fragments are
/// concatenated as-is, surplus values are ignored.
#[must_use]
pub fn render<I>(fragments: &[&str], values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    let mut out = String::new();
    let mut values = values.into_iter();
    let mut fragments = fragments.iter();

    if let Some(first) = fragments.next() {
        out.push_str(first);
    }
    for fragment in fragments {
        if let Some(value) = values.next() {
            value.into().render_into(&mut out);
        }
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn false_value_vanishes() {
        assert_eq!(render(&["<b>", "</b>"], [Node::from(false)]), "<b></b>");
    }

    #[test]
    fn true_value_vanishes() {
        assert_eq!(render(&["<b>", "</b>"], [Node::from(true)]), "<b></b>");
    }

    #[test]
    fn text_value_is_kept() {
        assert_eq!(render(&["<b>", "</b>"], [Node::from("x")]), "<b>x</b>");
    }

    #[test]
    fn zero_is_preserved() {
        assert_eq!(render(&["", ""], [Node::from(0_usize)]), "0");
    }

    #[test]
    fn none_vanishes() {
        assert_eq!(render(&["<i>", "</i>"], [Node::from(None::<&str>)]), "<i></i>");
    }

    #[test]
    fn sequence_concatenates_recursively() {
        let items = Node::seq([
            Node::text("<li>a</li>"),
            Node::Empty,
            Node::seq([Node::text("<li>"), Node::text("b"), Node::text("</li>")]),
        ]);
        assert_eq!(render(&["<ul>", "</ul>"], [items]), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn when_keeps_markup_only_when_condition_holds() {
        assert_eq!(Node::when(true, "checked").render(), "checked");
        assert_eq!(Node::when(false, "checked").render(), "");
    }

    #[test]
    fn values_are_not_escaped() {
        // Trusted-verbatim interpolation; see DESIGN.md.
        assert_eq!(
            render(&["<label>", "</label>"], [Node::from("<script>")]),
            "<label><script></label>"
        );
    }

    #[test]
    fn missing_values_leave_fragments_joined() {
        assert_eq!(render(&["a", "b", "c"], [Node::from("-")]), "a-bc");
    }

    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = prop_oneof![
            Just(Node::Empty),
            "[a-z<>/\"= ]{0,12}".prop_map(Node::Text),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Node::Sequence)
        })
    }

    proptest! {
        #[test]
        fn rendering_is_idempotent(node in arb_node()) {
            prop_assert_eq!(node.render(), node.render());
        }

        #[test]
        fn sequence_render_is_concatenation(nodes in prop::collection::vec(arb_node(), 0..6)) {
            let joined: String = nodes.iter().map(Node::render).collect();
            prop_assert_eq!(Node::Sequence(nodes).render(), joined);
        }
    }
}
