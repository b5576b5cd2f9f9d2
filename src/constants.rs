//! Common constants used throughout the Repose application.

/// Default configuration file name, relative to the project root
pub const CONFIG_FILE: &str = "config.yml";

/// Directory holding the `*.tmpl` files, relative to the project root
pub const TEMPLATE_DIR: &str = "template";

/// Glob selecting template files inside [`TEMPLATE_DIR`]
pub const TEMPLATE_GLOB: &str = "*.tmpl";

/// Line that opens and closes the front matter block
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// File stem of a directory's own index document, in any content format
pub const INDEX_NAME: &str = "index";

/// Content type of files placed directly in the content root
pub const DEFAULT_CONTENT_TYPE: &str = "page";

/// Synthetic content type of the content root directory itself
pub const ROOT_CONTENT_TYPE: &str = "content";

/// Content types that never get a synthesized listing page
pub const UNLISTED_CONTENT_TYPES: [&str; 1] = [ROOT_CONTENT_TYPE];

/// Last-resort content template
pub const DEFAULT_TEMPLATE: &str = "default.tmpl";

/// Page shell wrapping every rendered fragment
pub const FULL_PAGE_TEMPLATE: &str = "fullpage.tmpl";

/// Global listing template
pub const LIST_TEMPLATE: &str = "list.tmpl";

/// Metadata key naming an explicit content template
pub const TEMPLATE_KEY: &str = "template";

/// Metadata key holding the page title
pub const TITLE_KEY: &str = "title";

/// Extension of every generated page
pub const OUTPUT_EXTENSION: &str = "html";

/// Listing template used when the template directory has no `list.tmpl`
pub const BUILTIN_LIST_TEMPLATE: &str = r#"<article>
    <h1>{{ title }}</h1>
    <ul>
    {% for file in files %}
        <li><a href="{{ file.link }}">{{ file.title }}</a></li>
    {% endfor %}
    </ul>
</article>
"#;

/// Front matter and heading written by `repose new`
pub const NEW_CONTENT: &str = r#"---
title: "{{ title }}"
description: "{{ content_type }} about {{ title }}"
tags: []
image:
index: true
author: "{{ author }}"
publish_date:
template: "{{ content_type }}.tmpl"
---

# {{ title }}
"#;
