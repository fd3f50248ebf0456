//! End-to-end render tests.
//!
//! Each test declares components through the factory and inspects the
//! neutral node tree a render call produces.

use sarto_atelier_core::{
    clean_template, cva, foreign, props, style, CompoundVariant, DedupMerge, ElementNode,
    NodeRef, PropValue, Props, StyleTarget, Template, Tw, VNode, VariantSchema,
};

fn element(node: &VNode) -> &ElementNode {
    node.as_element().expect("expected an element")
}

fn button_schema() -> VariantSchema {
    VariantSchema::new().variant(
        "$variant",
        [("primary", "btn-primary"), ("secondary", "btn-secondary")],
    )
}

fn field_schema() -> VariantSchema {
    VariantSchema::new()
        .variant("$hasError", [("true", "border-red-500")])
        .variant("$touched", [("true", "border-solid")])
        .compound(
            CompoundVariant::new()
                .when("$hasError", true)
                .when("$touched", true)
                .class("ring-2 ring-red-500"),
        )
}

// =============================================================================
// Variance
// =============================================================================

mod variance {
    use super::*;

    #[test]
    fn selects_option() {
        let button = cva("btn-base", button_schema());
        insta::assert_snapshot!(button.resolve(&props! { "$variant" => "primary" }), @"btn-base btn-primary");
    }

    #[test]
    fn caller_class_appended() {
        let button = cva("btn-base", button_schema());
        insta::assert_snapshot!(
            button.resolve(&props! { "$variant" => "secondary", "class" => "extra" }),
            @"btn-base btn-secondary extra"
        );
    }

    #[test]
    fn compound_after_simple() {
        let field = cva("", field_schema());
        let class = field.resolve(&props! { "$hasError" => true, "$touched" => true });
        insta::assert_snapshot!(class, @"border-red-500 border-solid ring-2 ring-red-500");

        let border = class.find("border-red-500").unwrap();
        let ring = class.find("ring-2").unwrap();
        assert!(border < ring);
    }

    #[test]
    fn compound_after_simple_regardless_of_declaration_order() {
        // the compound rule is declared before the groups it depends on
        let schema = VariantSchema::new()
            .compound(CompoundVariant::new().when("$tone", "danger").class("font-bold"))
            .variant("$tone", [("danger", "text-red-600 font-normal")]);
        let class = cva("", schema).resolve(&props! { "$tone" => "danger" });
        insta::assert_snapshot!(class, @"text-red-600 font-bold");
    }

    #[test]
    fn caller_class_beats_everything() {
        let field = cva("ring-0", field_schema());
        let class = field.resolve(&props! {
            "$hasError" => true,
            "$touched" => true,
            "className" => "ring-0 border-red-500",
        });
        assert!(class.ends_with("ring-0 border-red-500"));
        assert_eq!(class.matches("ring-0").count(), 1);
        assert!(!class.contains("ring-2"));
    }

    #[test]
    fn caller_class_overrides_conflicting_schema_class() {
        let tw = Tw::new();
        let button = tw.button().cva(
            "px-2 bg-gray-100",
            VariantSchema::new().variant("$v", [("a", "px-4")]),
        );
        let node = button.render(props! { "$v" => "a", "class" => "bg-red-500" }, vec![]);
        insta::assert_snapshot!(element(&node).class, @"px-4 bg-red-500");
    }

    #[test]
    fn unknown_option_equals_omitted_group() {
        let button = cva("btn-base", button_schema());
        assert_eq!(
            button.resolve(&props! { "$variant" => "tertiary" }),
            button.resolve(&props! {})
        );
    }

    #[test]
    fn inert_compound_on_undeclared_option() {
        let schema = button_schema().compound(
            CompoundVariant::new().when("$variant", "ghost").class("bg-transparent"),
        );
        let class = cva("", schema).resolve(&props! { "$variant" => "primary" });
        assert_eq!(class, "btn-primary");
    }
}

// =============================================================================
// Template form
// =============================================================================

mod template {
    use super::*;

    #[test]
    fn literal_classes_and_caller_class() {
        let tw = Tw::new();
        let title = tw.h1().classes("text-2xl\n    font-bold ,");
        let node = title.render(props! { "class" => "mt-4", "id" => "title" }, vec!["Hi".into()]);

        let h1 = element(&node);
        assert_eq!(h1.tag, "h1");
        insta::assert_snapshot!(h1.class, @"text-2xl font-bold mt-4");
        assert_eq!(h1.attr("id"), Some(&PropValue::from("title")));
        assert_eq!(h1.children, vec![VNode::text("Hi")]);
    }

    #[test]
    fn interpolations_see_transient_props() {
        let tw = Tw::new();
        let badge = tw.span().template(
            Template::new()
                .lit("badge")
                .interp(|props| {
                    props
                        .get("$tone")
                        .and_then(PropValue::as_str)
                        .map(|tone| format!("badge-{tone}"))
                })
                .lit("rounded"),
        );

        let node = badge.render(props! { "$tone" => "info" }, vec![]);
        insta::assert_snapshot!(element(&node).class, @"badge badge-info rounded");
        assert!(element(&node).attr("$tone").is_none());

        let node = badge.render(props! {}, vec![]);
        insta::assert_snapshot!(element(&node).class, @"badge rounded");
    }

    #[test]
    fn clean_template_never_leaves_extra_whitespace() {
        let cases: [(&[&str], &str); 4] = [
            (&["  a  ", " b"], "  c "),
            (&["\n\n", "\t"], ""),
            (&["a\n\nb", ","], "\n c"),
            (&[], "   "),
        ];
        for (fragments, inherited) in cases {
            let out = clean_template(fragments, inherited, &DedupMerge);
            assert_eq!(out.trim(), out);
            assert!(!out.contains("  "));
            assert!(!out.contains('\n'));
        }
    }
}

// =============================================================================
// Forwarding
// =============================================================================

mod forwarding {
    use super::*;

    #[test]
    fn transient_props_stripped_for_intrinsic() {
        let tw = Tw::new();
        let button = tw.button().cva("btn-base", button_schema());
        let node = button.render(
            props! { "$variant" => "primary", "type" => "submit", "$other" => 1 },
            vec![],
        );
        let el = element(&node);
        assert_eq!(el.attrs.keys().collect::<Vec<_>>(), ["type"]);
        insta::assert_snapshot!(el.class, @"btn-base btn-primary");
    }

    #[test]
    fn foreign_component_receives_everything() {
        let tw = Tw::new();
        let link = foreign("Link", |props: Props, children| {
            let mut el = ElementNode::new("a");
            el.class = props.get("class").and_then(PropValue::as_str).unwrap_or("").into();
            el.attrs = props;
            el.children = children;
            VNode::Element(el)
        });
        let styled_link = tw.styled(link).classes("underline");
        let node = styled_link.render(
            props! { "$prefetch" => true, "href" => "/docs", "style" => style! { "color" => "red" } },
            vec![],
        );

        let a = element(&node);
        assert_eq!(a.class, "underline");
        assert_eq!(a.attr("$prefetch"), Some(&PropValue::Bool(true)));
        assert_eq!(a.attr("href"), Some(&PropValue::from("/docs")));
        assert_eq!(
            a.attr("style"),
            Some(&PropValue::Style(style! { "color" => "red" }))
        );
    }

    #[test]
    fn ref_forwarded_to_element() {
        let tw = Tw::new();
        let input = tw.input().classes("field");
        let node = input.render(props! { "ref" => NodeRef::new("email") }, vec![]);
        assert_eq!(element(&node).node_ref, Some(NodeRef::new("email")));
        assert!(element(&node).attr("ref").is_none());
    }
}

// =============================================================================
// Polymorphism
// =============================================================================

mod polymorphism {
    use super::*;

    #[test]
    fn as_overrides_intrinsic_target() {
        let tw = Tw::new();
        let box_ = tw.div().classes("box");
        let node = box_.render(props! { "$as" => "button", "type" => "button" }, vec![]);

        let el = element(&node);
        assert_eq!(el.tag, "button");
        assert!(el.attr("$as").is_none());
        assert_eq!(el.class, "box");
    }

    #[test]
    fn as_accepts_target_values() {
        let tw = Tw::new();
        let box_ = tw.div().classes("box");
        let node = box_.render(props! { "$as" => StyleTarget::intrinsic("section") }, vec![]);
        assert_eq!(element(&node).tag, "section");
    }

    #[test]
    fn styled_wrapping_styled_nests_override() {
        let tw = Tw::new();
        let inner = tw.div().classes("inner-base p-2");
        let outer = tw.styled(&inner).classes("outer");

        let node = outer.render(props! { "$as" => "button" }, vec![]);
        let el = element(&node);
        assert_eq!(el.tag, "button");
        insta::assert_snapshot!(el.class, @"inner-base p-2 outer");
        assert!(el.attr("$as").is_none());
    }

    #[test]
    fn styled_wrapping_styled_without_override() {
        let tw = Tw::new();
        let inner = tw.span().classes("inner");
        let outer = tw.styled(&inner).classes("outer");

        let el = outer.render(props! { "class" => "caller" }, vec![]);
        assert_eq!(element(&el).tag, "span");
        insta::assert_snapshot!(element(&el).class, @"inner outer caller");
    }

    #[test]
    fn wrapping_cva_component_keeps_variants() {
        let tw = Tw::new();
        let button = tw.button().cva("btn-base", button_schema());
        let link_button = tw.styled(&button).classes("no-underline");

        let node = link_button.render(props! { "$as" => "a", "$variant" => "secondary" }, vec![]);
        let el = element(&node);
        assert_eq!(el.tag, "a");
        insta::assert_snapshot!(el.class, @"btn-base btn-secondary no-underline");
        assert!(el.attrs.is_empty());
    }
}

// =============================================================================
// withProps / withStyle
// =============================================================================

mod chaining {
    use super::*;

    #[test]
    fn with_props_caller_wins() {
        let tw = Tw::new();
        let button = tw
            .button()
            .cva("btn-base", button_schema())
            .with_props(props! { "type" => "button", "$variant" => "primary" });

        let node = button.render(props! { "$variant" => "secondary" }, vec![]);
        let el = element(&node);
        insta::assert_snapshot!(el.class, @"btn-base btn-secondary");
        assert_eq!(el.attr("type"), Some(&PropValue::from("button")));

        let node = button.render(props! {}, vec![]);
        insta::assert_snapshot!(element(&node).class, @"btn-base btn-primary");
    }

    #[test]
    fn with_props_target_can_be_wrapped() {
        let tw = Tw::new();
        let submit = tw.button().classes("btn").with_props(props! { "type" => "submit" });
        let wide = tw.styled(submit).classes("w-full");

        let node = wide.render(props! {}, vec![]);
        let el = element(&node);
        assert_eq!(el.attr("type"), Some(&PropValue::from("submit")));
        insta::assert_snapshot!(el.class, @"btn w-full");
    }

    #[test]
    fn with_style_merges_caller_style() {
        let tw = Tw::new();
        let card = tw
            .div()
            .classes("card")
            .with_style(style! { "padding" => "4px", "color" => "black" });

        let node = card.render(props! { "style" => style! { "color" => "white" } }, vec![]);
        assert_eq!(
            element(&node).style,
            style! { "padding" => "4px", "color" => "white" }
        );
    }
}
