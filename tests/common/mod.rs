#![allow(dead_code)]

use repose::builder::{BuildSummary, Builder};
use repose::config::Config;
use repose::context::BuildContext;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{{ title }}</title>
</head>
<body>
    {% include "header.tmpl" %}
    {% include "navigation.tmpl" %}
    <main>
    {{ content }}
    </main>
    {% include "footer.tmpl" %}
</body>
</html>
"#;

pub const HEADER: &str = "<header>{{ logo }}<h2>{{ site_name }}</h2></header>\n";
pub const NAVIGATION: &str = "<nav><a href=\"/\">Home</a></nav>\n";
pub const FOOTER: &str = "<footer>&copy; {{ site_name }}</footer>\n";
pub const DEFAULT: &str = "<!-- default.tmpl -->\n<article>{{ content }}</article>\n";
pub const LIST: &str = "<!-- list.tmpl -->\n<ul>{% for link in links %}<li><a href=\"{{ link }}\">{{ link }}</a></li>{% endfor %}</ul>\n";

/// A throwaway project with a config file and the standard templates.
pub struct Site {
    dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let site = Site { dir: TempDir::new().unwrap() };
        site.write("config.yml", "sitename: Test Site\nauthor: Tester\n");
        site.write("template/fullpage.tmpl", FULL_PAGE);
        site.write("template/header.tmpl", HEADER);
        site.write("template/navigation.tmpl", NAVIGATION);
        site.write("template/footer.tmpl", FOOTER);
        site.write("template/default.tmpl", DEFAULT);
        site.write("template/list.tmpl", LIST);
        fs::create_dir_all(site.path("content")).unwrap();
        site
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write<P: AsRef<Path>>(&self, rel: P, content: &str) {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn remove<P: AsRef<Path>>(&self, rel: P) {
        let path = self.path(rel);
        if path.is_dir() {
            fs::remove_dir_all(path).unwrap();
        } else {
            fs::remove_file(path).unwrap();
        }
    }

    pub fn read<P: AsRef<Path>>(&self, rel: P) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    pub fn exists<P: AsRef<Path>>(&self, rel: P) -> bool {
        self.path(rel).exists()
    }

    pub fn context(&self) -> BuildContext {
        BuildContext::load(self.root(), None).unwrap()
    }

    pub fn build(&self) -> BuildSummary {
        let ctx = self.context();
        Builder::new(&ctx).unwrap().build().unwrap()
    }
}

pub fn page(title: &str, extra: &str, body: &str) -> String {
    format!("---\ntitle: {title}\n{extra}---\n{body}")
}

pub fn config() -> Config {
    Config { sitename: "Test Site".to_string(), ..Config::default() }
}
