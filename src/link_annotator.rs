use crate::{
    element::Element,
    element_output::ElementOutput,
    link::{LinkKind, NEW_TAB_REL, NEW_TAB_TARGET},
};
use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const ANCHOR_ELEMENT: &str = "a";
const HREF_ATTRIBUTE: &str = "href";
const TARGET_ATTRIBUTE: &str = "target";
const REL_ATTRIBUTE: &str = "rel";

/// Annotates links in a parsed HTML document so that external links open in
/// new browsing contexts.
///
/// It returns outputs of all anchor elements in document order.
pub fn annotate_links(dom: &RcDom) -> Vec<ElementOutput> {
    let mut outputs = vec![];

    annotate_node(&dom.document, &mut outputs);

    outputs
}

fn annotate_node(node: &Handle, outputs: &mut Vec<ElementOutput>) {
    if let NodeData::Element { name, attrs, .. } = &node.data {
        if &*name.local == ANCHOR_ELEMENT {
            outputs.push(annotate_anchor(&mut attrs.borrow_mut()));
        }
    }

    // Template contents are not children of template elements.
    for node in node.children.borrow().iter() {
        annotate_node(node, outputs);
    }
}

fn annotate_anchor(attributes: &mut Vec<Attribute>) -> ElementOutput {
    let Some(href) = get_attribute(attributes, HREF_ATTRIBUTE)
        .filter(|href| !href.is_empty())
        .map(ToOwned::to_owned)
    else {
        return ElementOutput::new(
            Element::new(
                ANCHOR_ELEMENT.into(),
                get_attribute(attributes, HREF_ATTRIBUTE)
                    .map(|href| vec![(HREF_ATTRIBUTE.into(), href.into())])
                    .unwrap_or_default(),
            ),
            None,
            false,
        );
    };

    let kind = LinkKind::classify(&href);
    let changed = if kind.opens_new_tab() {
        let target = set_attribute(attributes, TARGET_ATTRIBUTE, NEW_TAB_TARGET);
        let rel = set_attribute(attributes, REL_ATTRIBUTE, NEW_TAB_REL);

        target || rel
    } else {
        false
    };

    ElementOutput::new(
        Element::new(ANCHOR_ELEMENT.into(), vec![(HREF_ATTRIBUTE.into(), href)]),
        Some(kind),
        changed,
    )
}

fn get_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attribute| is_attribute(attribute, name))
        .map(|attribute| &*attribute.value)
}

/// Sets an attribute and returns whether its value is changed.
fn set_attribute(attributes: &mut Vec<Attribute>, name: &str, value: &str) -> bool {
    if let Some(attribute) = attributes
        .iter_mut()
        .find(|attribute| is_attribute(attribute, name))
    {
        if &*attribute.value == value {
            return false;
        }

        attribute.value = value.into();
    } else {
        attributes.push(Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
            value: value.into(),
        });
    }

    true
}

fn is_attribute(attribute: &Attribute, name: &str) -> bool {
    attribute.name.prefix.is_none() && &*attribute.name.local == name
}
