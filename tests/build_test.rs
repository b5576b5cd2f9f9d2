mod common;

use common::{page, Site};
use repose::builder::Builder;
use repose::error::Error;

#[test_log::test]
fn test_post_with_listing() {
    let site = Site::new();
    site.write("content/post/hello.md", &page("Hello", "", "# Hi\n"));

    let summary = site.build();
    assert!(summary.is_clean());
    assert_eq!(summary.pages, vec![site.path("web/post/hello.html")]);
    assert_eq!(summary.listings, vec![site.path("web/post/index.html")]);

    let html = site.read("web/post/hello.html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Hello</title>"));
    assert!(html.contains("<!-- default.tmpl -->"));
    assert!(html.contains("<h1>Hi</h1>"));
    assert!(html.contains("<h2>Test Site</h2>"));
    assert!(html.contains("<footer>&copy; Test Site</footer>"));

    let index = site.read("web/post/index.html");
    assert!(index.contains("<title>All posts</title>"));
    assert!(index.contains("<!-- list.tmpl -->"));
    assert!(index.contains(r#"<a href="hello.html">hello.html</a>"#));
}

#[test]
fn test_builds_are_deterministic() {
    let populate = |site: &Site| {
        site.write("content/about.md", &page("About", "", "About *us*.\n"));
        site.write("content/post/a.md", &page("A", "tags: [x, y]\n", "alpha\n"));
        site.write("content/post/b.md", &page("B", "", "beta\n"));
        site.write("content/project/x/deep.html", &page("Deep", "", "<p>deep</p>\n"));
    };
    let first = Site::new();
    let second = Site::new();
    populate(&first);
    populate(&second);

    first.build();
    first.build();
    second.build();

    assert!(!dir_diff::is_different(first.path("web"), second.path("web")).unwrap());
}

#[test]
fn test_assets_survive_rebuilds() {
    let site = Site::new();
    site.write("content/post/hello.md", &page("Hello", "", "hi\n"));
    site.write("web/assets/css/site.css", "body { margin: 0; }\n");
    site.write("web/stale.html", "old");
    site.write("web/gone/deeper/old.html", "old");

    site.build();
    site.write("web/assets/img/logo.svg", "<svg/>");
    site.build();

    assert_eq!(site.read("web/assets/css/site.css"), "body { margin: 0; }\n");
    assert_eq!(site.read("web/assets/img/logo.svg"), "<svg/>");
    assert!(!site.exists("web/stale.html"));
    assert!(!site.exists("web/gone"));
    assert!(site.exists("web/post/hello.html"));
}

#[test]
fn test_removed_content_disappears_from_output() {
    let site = Site::new();
    site.write("content/post/a.md", &page("A", "", "a\n"));
    site.write("content/post/b.md", &page("B", "", "b\n"));
    site.build();
    assert!(site.exists("web/post/b.html"));

    site.remove("content/post/b.md");
    site.build();

    assert!(!site.exists("web/post/b.html"));
    assert!(!site.read("web/post/index.html").contains("b.html"));
}

#[test]
fn test_listing_links_every_sibling() {
    let site = Site::new();
    for name in ["one", "two", "three"] {
        site.write(format!("content/post/{name}.md"), &page(name, "", "body\n"));
    }
    site.write("content/post/notes.txt", "not content");
    site.write("content/post/nested/child.md", &page("Child", "", "body\n"));

    site.build();

    let index = site.read("web/post/index.html");
    for name in ["one", "two", "three"] {
        assert!(index.contains(&format!(r#"href="{name}.html""#)), "missing {name}");
    }
    assert!(!index.contains("notes"));
    assert!(!index.contains("child.html"));
    assert!(site.exists("web/post/nested/index.html"));
}

#[test]
fn test_author_index_is_not_replaced() {
    let site = Site::new();
    site.write("content/post/index.md", &page("Blog", "", "Welcome to the blog.\n"));
    site.write("content/post/hello.md", &page("Hello", "", "hi\n"));

    let summary = site.build();

    assert!(summary.listings.is_empty());
    let index = site.read("web/post/index.html");
    assert!(index.contains("<title>Blog</title>"));
    assert!(index.contains("Welcome to the blog."));
}

#[test]
fn test_content_root_gets_no_listing() {
    let site = Site::new();
    site.write("content/about.md", &page("About", "", "about\n"));

    let summary = site.build();

    assert!(site.exists("web/about.html"));
    assert!(!site.exists("web/index.html"));
    assert!(summary.listings.is_empty());
}

#[test]
fn test_template_chain_in_build() {
    let site = Site::new();
    site.write("template/post.tmpl", "<!-- post.tmpl -->{{ content }}");
    site.write("template/custom.tmpl", "<!-- custom.tmpl -->{{ metadata.mood }}|{{ content }}");
    site.write("content/post/typed.md", &page("Typed", "", "typed\n"));
    site.write(
        "content/post/custom.md",
        &page("Custom", "template: custom.tmpl\nmood: sunny\n", "custom\n"),
    );
    site.write("content/page/plain.md", &page("Plain", "", "plain\n"));

    site.build();

    assert!(site.read("web/post/typed.html").contains("<!-- post.tmpl -->"));
    let custom = site.read("web/post/custom.html");
    assert!(custom.contains("<!-- custom.tmpl -->sunny|"));
    assert!(site.read("web/page/plain.html").contains("<!-- default.tmpl -->"));
}

#[test]
fn test_title_is_escaped_and_body_is_not() {
    let site = Site::new();
    site.write("content/post/amp.md", &page("Fish & Chips", "", "**bold**\n"));

    site.build();

    let html = site.read("web/post/amp.html");
    assert!(html.contains("<title>Fish &amp; Chips</title>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn test_html_source_passes_through() {
    let site = Site::new();
    site.write("content/page/raw.html", &page("Raw", "", "<section># not markdown</section>\n"));

    site.build();

    assert!(site.read("web/page/raw.html").contains("<section># not markdown</section>"));
}

#[test_log::test]
fn test_malformed_page_is_skipped() {
    let site = Site::new();
    site.write("content/post/good.md", &page("Good", "", "good\n"));
    site.write("content/post/bad.md", "# No front matter here\n");

    let summary = site.build();

    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].path, std::path::PathBuf::from("post/bad.md"));
    assert!(matches!(summary.failures[0].error, Error::MalformedContent { .. }));
    assert!(site.exists("web/post/good.html"));
    assert!(!site.exists("web/post/bad.html"));

    let index = site.read("web/post/index.html");
    assert!(index.contains("good.html"));
    assert!(!index.contains("bad.html"));
}

#[test]
fn test_missing_template_fails_only_that_page() {
    let site = Site::new();
    site.write("content/post/ok.md", &page("Ok", "", "ok\n"));
    site.write("content/post/broken.md", &page("Broken", "template: nope.tmpl\n", "x\n"));

    let summary = site.build();

    assert_eq!(summary.failures.len(), 1);
    match &summary.failures[0].error {
        Error::MissingTemplate { template, page } => {
            assert_eq!(template, "nope.tmpl");
            assert_eq!(page, &std::path::PathBuf::from("post/broken.md"));
        }
        other => panic!("Expected MissingTemplate, got {other:?}"),
    }
    assert!(site.exists("web/post/ok.html"));
}

#[test]
fn test_missing_content_root_aborts_before_clearing_output() {
    let site = Site::new();
    site.write("web/keep.html", "previous build");
    site.remove("content");

    let ctx = site.context();
    let result = Builder::new(&ctx).unwrap().build();

    assert!(matches!(result, Err(Error::ContentWalkError { .. })));
    assert_eq!(site.read("web/keep.html"), "previous build");
}

#[test]
fn test_missing_template_directory_is_fatal() {
    let site = Site::new();
    site.remove("template");

    let ctx = site.context();
    assert!(matches!(Builder::new(&ctx), Err(Error::TemplateDirectoryError { .. })));
}

#[test]
fn test_builtin_listing_template_when_list_is_missing() {
    let site = Site::new();
    site.remove("template/list.tmpl");
    site.write("content/post/hello.md", &page("Hello", "", "hi\n"));

    site.build();

    let index = site.read("web/post/index.html");
    assert!(index.contains(r#"<a href="hello.html">Hello</a>"#));
}

#[test]
fn test_content_type_listing_template() {
    let site = Site::new();
    site.write(
        "template/post_list.tmpl",
        "<!-- post_list.tmpl -->{% for file in files %}[{{ file.title }}:{{ file.link }}]{% endfor %}",
    );
    site.write("content/post/hello.md", &page("Hello", "", "hi\n"));
    site.write("content/page/about.md", &page("About", "", "about\n"));

    site.build();

    let posts = site.read("web/post/index.html");
    assert!(posts.contains("<!-- post_list.tmpl -->[Hello:hello.html]"));
    assert!(site.read("web/page/index.html").contains("<!-- list.tmpl -->"));
}

#[test]
fn test_logo_markup_reaches_the_shell() {
    let site = Site::new();
    site.write("config.yml", "sitename: Logo Site\nlogo: /assets/img/logo.png\n");
    site.write("content/post/hello.md", &page("Hello", "", "hi\n"));

    site.build();

    let html = site.read("web/post/hello.html");
    assert!(html.contains(r#"<img src="/assets/img/logo.png" alt="Logo Site" width="50" height="50">"#));
}

#[test]
fn test_author_index_in_markdown_extension_is_not_replaced() {
    let site = Site::new();
    site.write("content/post/index.markdown", &page("Blog", "", "Welcome to the blog.\n"));
    site.write("content/post/hello.md", &page("Hello", "", "hi\n"));

    let summary = site.build();

    assert!(summary.listings.is_empty());
    assert!(site.read("web/post/index.html").contains("Welcome to the blog."));
}

#[test_log::test]
fn test_sources_with_same_output_fail_the_later_one() {
    let site = Site::new();
    site.write("content/post/a.html", &page("Html", "", "<p>from html</p>\n"));
    site.write("content/post/a.md", &page("Markdown", "", "from markdown\n"));

    let summary = site.build();

    assert_eq!(summary.pages, vec![site.path("web/post/a.html")]);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].path, std::path::PathBuf::from("post/a.md"));
    assert!(matches!(summary.failures[0].error, Error::DuplicateOutput { .. }));
    assert!(site.read("web/post/a.html").contains("<p>from html</p>"));
}

#[test]
fn test_output_dir_over_sources_is_refused() {
    for output in [".", "content", "template"] {
        let site = Site::new();
        site.write("config.yml", &format!("sitename: Test Site\noutputDirectory: \"{output}\"\n"));
        site.write("content/post/hello.md", &page("Hello", "", "hi\n"));

        let ctx = site.context();
        let result = Builder::new(&ctx).unwrap().build();

        assert!(matches!(result, Err(Error::OutputDirectoryError { .. })), "{output}");
        assert!(site.exists("config.yml"));
        assert!(site.exists("content/post/hello.md"));
        assert!(site.exists("template/default.tmpl"));
    }
}
