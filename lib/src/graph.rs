//! The view of a semantic graph needed to import ontology metadata: find the node that
//! describes the ontology, list its statements, and resolve each object as either a
//! literal or a resource reference.

use crate::consts::{ONTOLOGY, TYPE};
use crate::errors::MetadataError;
use log::trace;
use oxigraph::model::{Graph, NamedNode, NamedOrBlankNode, NamedOrBlankNodeRef, TermRef};

/// The object of a statement, resolved as a literal if possible and otherwise as the IRI
/// of the referenced resource. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectValue {
    Literal(String),
    Reference(String),
}

impl ObjectValue {
    /// Blank nodes have neither a lexical value nor an IRI and resolve to `None`.
    pub fn from_term(term: TermRef<'_>) -> Option<Self> {
        match term {
            TermRef::Literal(lit) => Some(ObjectValue::Literal(lit.value().to_string())),
            TermRef::NamedNode(n) => Some(ObjectValue::Reference(n.as_str().to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ObjectValue::Literal(s) | ObjectValue::Reference(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ObjectValue::Literal(s) | ObjectValue::Reference(s) => s,
        }
    }
}

pub trait MetadataGraph {
    /// The single `owl:Ontology` instance of the graph.
    fn descriptive_node(&self) -> Result<NamedOrBlankNode, MetadataError>;

    /// Every statement about `node`, in whatever order the graph yields them.
    fn statements(&self, node: NamedOrBlankNodeRef<'_>) -> Vec<(NamedNode, ObjectValue)>;
}

impl MetadataGraph for Graph {
    fn descriptive_node(&self) -> Result<NamedOrBlankNode, MetadataError> {
        let decls: Vec<NamedOrBlankNodeRef> =
            self.subjects_for_predicate_object(TYPE, ONTOLOGY).collect();
        match decls.as_slice() {
            [] => Err(MetadataError::NoDescriptiveNode),
            [decl] => Ok(decl.into_owned()),
            _ => Err(MetadataError::AmbiguousDescriptiveNode { count: decls.len() }),
        }
    }

    fn statements(&self, node: NamedOrBlankNodeRef<'_>) -> Vec<(NamedNode, ObjectValue)> {
        self.triples_for_subject(node)
            .filter_map(|t| match ObjectValue::from_term(t.object) {
                Some(value) => Some((t.predicate.into_owned(), value)),
                None => {
                    trace!("Skipping statement {} with a blank object", t.predicate);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::read_graph_from;
    use oxigraph::io::RdfFormat;

    fn graph(ttl: &str) -> Graph {
        read_graph_from(ttl.as_bytes(), RdfFormat::Turtle).unwrap()
    }

    #[test]
    fn test_descriptive_node() {
        let g = graph(
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             <http://example.org/onto> a owl:Ontology .",
        );
        let node = g.descriptive_node().unwrap();
        assert_eq!(node.to_string(), "<http://example.org/onto>");
    }

    #[test]
    fn test_no_descriptive_node() {
        let g = graph("<http://example.org/a> <http://example.org/p> \"x\" .");
        assert!(matches!(
            g.descriptive_node(),
            Err(MetadataError::NoDescriptiveNode)
        ));
    }

    #[test]
    fn test_ambiguous_descriptive_node() {
        let g = graph(
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             <http://example.org/a> a owl:Ontology .\n\
             <http://example.org/b> a owl:Ontology .",
        );
        assert!(matches!(
            g.descriptive_node(),
            Err(MetadataError::AmbiguousDescriptiveNode { count: 2 })
        ));
    }

    #[test]
    fn test_statements_resolve_literals_and_references() {
        let g = graph(
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             @prefix dcterms: <http://purl.org/dc/terms/> .\n\
             <http://example.org/onto> a owl:Ontology ;\n\
                 dcterms:title \"Example\"@en ;\n\
                 dcterms:creator <http://example.org/alice> ;\n\
                 dcterms:publisher [ dcterms:title \"anon\" ] .",
        );
        let node = g.descriptive_node().unwrap();
        let statements = g.statements(node.as_ref());
        // rdf:type, title and creator; the blank publisher is skipped
        assert_eq!(statements.len(), 3);
        assert!(statements.iter().any(|(p, v)| p.as_str() == "http://purl.org/dc/terms/title"
            && *v == ObjectValue::Literal("Example".to_string())));
        assert!(statements.iter().any(|(p, v)| p.as_str() == "http://purl.org/dc/terms/creator"
            && *v == ObjectValue::Reference("http://example.org/alice".to_string())));
    }
}
