use ubb_build::{
    build, Builder, BuildError, ConcatRoot, Context, HandlerError, HandlerHub, Node, RootNode,
    TagHandler, TagNode,
};

/// A hub exercising all five handler slots at once.
fn forum_hub() -> HandlerHub<String> {
    HandlerHub::builder()
        .root(ConcatRoot)
        .specific(
            "b",
            TagHandler::recursive_fn(|_, _, children: Vec<String>| {
                Ok(format!("<b>{}</b>", children.concat()))
            }),
        )
        .specific(
            "url",
            TagHandler::leaf_fn(|node, _| {
                let dest = node
                    .attr_value("url")
                    .unwrap_or(node.inner_text.as_str());
                Ok(format!("<a href=\"{dest}\">{}</a>", node.inner_text))
            }),
        )
        .general(
            "^h[1-6]$",
            TagHandler::recursive_fn(|node, _, children: Vec<String>| {
                Ok(format!("<{0}>{1}</{0}>", node.name, children.concat()))
            }),
        )
        .default_handler(TagHandler::leaf_fn(|node, _| {
            Ok(format!("[{}]{}[/{}]", node.name, node.inner_text, node.name))
        }))
        .text_fn(|node, _| Ok(node.text.clone()))
        .build()
        .expect("forum hub must assemble")
}

#[test]
fn test_mixed_document() {
    // [h2]Title[/h2][b]hi [url=...]link[/url][/b][wat]?[/wat]
    let root = RootNode::new()
        .child(TagNode::new("h2").child(Node::text("Title")))
        .child(
            TagNode::new("b").child(Node::text("hi ")).child(
                TagNode::new("url")
                    .attr("url", "https://example.com")
                    .inner_text("link"),
            ),
        )
        .child(TagNode::new("wat").inner_text("?"));

    let mut ctx = Context::new();
    let output = build(&root, &forum_hub(), &mut ctx).unwrap();
    assert_eq!(
        output,
        "<h2>Title</h2><b>hi <a href=\"https://example.com\">link</a></b>[wat]?[/wat]"
    );
}

#[test]
fn test_repeated_builds_share_one_hub() {
    let hub = forum_hub();
    let root = RootNode::new().child(TagNode::new("b").child(Node::text("hi")));

    for _ in 0..3 {
        let mut ctx = Context::new();
        assert_eq!(build(&root, &hub, &mut ctx).unwrap(), "<b>hi</b>");
    }
}

#[test]
fn test_failure_surfaces_from_top_level_call() {
    let hub = HandlerHub::builder()
        .root(ConcatRoot)
        .specific(
            "forbidden",
            TagHandler::leaf_fn(|_, _| Err(HandlerError::new("tag not allowed"))),
        )
        .default_handler(TagHandler::leaf_fn(|node, _| Ok(node.inner_text.clone())))
        .text_fn(|node, _| Ok(node.text.clone()))
        .build()
        .unwrap();

    let root = RootNode::new()
        .child(TagNode::new("b").inner_text("fine"))
        .child(TagNode::new("forbidden"));

    let mut ctx = Context::new();
    let err = build(&root, &hub, &mut ctx).unwrap_err();
    assert!(err.to_string().contains("[forbidden]"));
}

#[test]
fn test_depth_guard_protects_against_pathological_nesting() {
    let hub = forum_hub();

    // 200 nested [b] tags.
    let mut node: Node = TagNode::new("b").child(Node::text("deep")).into();
    for _ in 0..199 {
        node = TagNode::new("b").child(node).into();
    }
    let root = RootNode::new().child(node);

    let mut ctx = Context::new();
    let err = Builder::new(&hub)
        .max_depth(64)
        .build(&root, &mut ctx)
        .unwrap_err();
    assert!(matches!(err, BuildError::DepthExceeded { limit: 64, .. }));
}
