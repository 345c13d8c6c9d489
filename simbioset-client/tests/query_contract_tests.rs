//! Contract tests for query-parameter encoding: a parameter is emitted iff
//! the corresponding option is defined and, for list options, non-empty.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use simbioset_client::types::kb::{DeleteNodeQuery, GetNodeParams, TreeParams};
use simbioset_client::types::search::ParagraphSearchParams;
use simbioset_core::{DocumentId, EntityIdType, NodeId};

fn tag_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

proptest! {
    #[test]
    fn paragraph_search_emits_a_pair_iff_the_option_is_set(
        query in "[a-z ]{1,20}",
        has_document in prop::bool::ANY,
        tags in vec(tag_name(), 0..4),
        exclude_tags in vec(tag_name(), 0..4),
        location in option::of("[a-z]{1,10}"),
        ecosystem_id in option::of("[a-z0-9]{1,10}"),
        hybrid in option::of(prop::bool::ANY),
        alpha in option::of(0.0f32..=1.0f32),
        rerank in option::of(prop::bool::ANY),
    ) {
        let mut params = ParagraphSearchParams::new(&query);
        params.document_id = has_document.then(DocumentId::generate);
        params.tags = tags.clone();
        params.exclude_tags = exclude_tags.clone();
        params.location = location.clone();
        params.ecosystem_id = ecosystem_id.clone();
        params.hybrid = hybrid;
        params.alpha = alpha;
        params.rerank = rerank;

        let pairs = params.query_pairs();
        let has = |key: &str| pairs.iter().any(|(k, _)| k == key);

        prop_assert!(has("query"));
        prop_assert_eq!(has("document_id"), has_document);
        prop_assert_eq!(has("tags"), !tags.is_empty());
        prop_assert_eq!(has("exclude_tags"), !exclude_tags.is_empty());
        prop_assert_eq!(has("location"), location.is_some());
        prop_assert_eq!(has("ecosystem_id"), ecosystem_id.is_some());
        prop_assert_eq!(has("hybrid"), hybrid.is_some());
        prop_assert_eq!(has("alpha"), alpha.is_some());
        prop_assert_eq!(has("rerank"), rerank.is_some());
        prop_assert_eq!(has("after"), false);
        prop_assert_eq!(has("before"), false);
    }

    #[test]
    fn list_filters_join_into_one_comma_separated_value(
        tags in vec(tag_name(), 1..5),
    ) {
        let mut params = ParagraphSearchParams::new("q");
        params.tags = tags.clone();
        let pairs = params.query_pairs();
        let value = pairs
            .iter()
            .find(|(k, _)| k == "tags")
            .map(|(_, v)| v.clone())
            .unwrap();
        prop_assert_eq!(value, tags.join(","));
    }

    #[test]
    fn delete_query_always_names_cascade(cascade in prop::bool::ANY) {
        let pairs = DeleteNodeQuery { cascade }.query_pairs();
        prop_assert_eq!(pairs.len(), 1);
        prop_assert_eq!(&pairs[0].0, "cascade");
        prop_assert_eq!(&pairs[0].1, &cascade.to_string());
    }

    #[test]
    fn tree_params_serialize_only_defined_filters(
        has_root in prop::bool::ANY,
        limit in option::of(1u32..100),
        offset in option::of(0u32..100),
        category in option::of("[a-z]{1,10}"),
        node_type in option::of("[a-z]{1,10}"),
    ) {
        let params = TreeParams {
            root_id: has_root.then(NodeId::generate),
            limit,
            offset,
            category: category.clone(),
            node_type: node_type.clone(),
        };
        let value = serde_json::to_value(&params).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.contains_key("root_id"), has_root);
        prop_assert_eq!(object.contains_key("limit"), limit.is_some());
        prop_assert_eq!(object.contains_key("offset"), offset.is_some());
        prop_assert_eq!(object.contains_key("category"), category.is_some());
        prop_assert_eq!(object.contains_key("node_type"), node_type.is_some());
    }

    #[test]
    fn get_node_params_omit_unset_inclusion_flags(
        include_parent in option::of(prop::bool::ANY),
        include_children in option::of(prop::bool::ANY),
        include_siblings in option::of(prop::bool::ANY),
        depth in option::of(1u32..5),
    ) {
        let params = GetNodeParams {
            include_parent,
            include_children,
            include_siblings,
            depth,
        };
        let value = serde_json::to_value(&params).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.contains_key("include_parent"), include_parent.is_some());
        prop_assert_eq!(object.contains_key("include_children"), include_children.is_some());
        prop_assert_eq!(object.contains_key("include_siblings"), include_siblings.is_some());
        prop_assert_eq!(object.contains_key("depth"), depth.is_some());
    }
}
