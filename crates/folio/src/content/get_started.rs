//! "Get Started with Coderrect OpenRace".

use folio_core::{node::RenderNode, props::PropertyBag, value::Value};

use super::{ContentUnit, FrontMatter, Metadata, NavLink, TocEntry};
use crate::resolve::mdx;

const BUILD_LLVM: &str = "git clone --depth 1 -b llvmorg-10.0.1 https://github.com/llvm/llvm-project.git
cd llvm-project && mkdir build && cd build
cmake \\
    -DLLVM_TARGETS_TO_BUILD=\"X86\" \\
    -DCMAKE_CXX_STANDARD=\"17\" \\
    -DLLVM_INCLUDE_EXAMPLES=OFF \\
    -DLLVM_INCLUDE_TESTS=OFF \\
    -DLLVM_INCLUDE_BENCHMARKS=OFF \\
    -DLLVM_APPEND_VC_REV=OFF \\
    -DLLVM_OPTIMIZED_TABLEGEN=ON \\
    -DCMAKE_BUILD_TYPE=Release \\
    ../llvm
make -j
";

const BUILD_OPENRACE: &str = "git clone https://github.com/coderrect-inc/OpenRace.git
mkdir build && cd build
conan install ..
cmake -DLLVM_DIR=/path/to/llvm-project/build/lib/cmake/llvm/ ..
make -j
";

const RUN_TESTER: &str = "./bin/tester\n";

/// The documentation home page.
#[derive(Debug, Clone)]
pub struct GetStarted {
    metadata: Metadata,
    toc: Vec<TocEntry>,
}

impl Default for GetStarted {
    fn default() -> Self {
        Self::new()
    }
}

impl GetStarted {
    pub fn new() -> Self {
        let front_matter = FrontMatter {
            id: "doc-get-started".to_string(),
            title: "Get Started with Coderrect OpenRace".to_string(),
            slug: "/".to_string(),
        };
        let metadata = Metadata {
            unversioned_id: "doc-get-started".to_string(),
            id: "doc-get-started".to_string(),
            is_docs_home_page: false,
            title: "Get Started with Coderrect OpenRace".to_string(),
            description: "Building the Project".to_string(),
            source: "@site/docs/doc-get-started.md".to_string(),
            source_dir_name: ".".to_string(),
            slug: "/".to_string(),
            permalink: "/OpenRace/".to_string(),
            edit_url: "https://github.com/coderrect-inc/OpenRace/tree/develop/website/docs/doc-get-started.md"
                .to_string(),
            version: "current".to_string(),
            front_matter,
            sidebar: Some("openraceSidebar".to_string()),
            previous: None,
            next: Some(NavLink {
                title: "Hello, World!".to_string(),
                permalink: "/OpenRace/doc-hello-world".to_string(),
            }),
        };
        let toc = vec![TocEntry {
            value: "Building the Project".to_string(),
            id: "building-the-project".to_string(),
            children: Vec::new(),
        }];
        Self { metadata, toc }
    }

    /// Props handed to the layout (`wrapper`).
    fn layout_props(&self) -> PropertyBag {
        PropertyBag::new().with("toc", Value::List(self.toc.iter().map(toc_value).collect()))
    }

    fn body(&self) -> Vec<RenderNode> {
        let none = PropertyBag::new;
        let in_p = || PropertyBag::new().with("parentName", "p");
        let code_block = |class: Option<&str>, source: &str| {
            let mut props = PropertyBag::new().with("parentName", "pre");
            if let Some(class) = class {
                props.insert("className", class);
            }
            mdx("pre", none(), [mdx("code", props, [text(source)])])
        };

        vec![
            mdx(
                "h2",
                none().with("id", "building-the-project"),
                [text("Building the Project")],
            ),
            mdx(
                "p",
                none(),
                [text(
                    "Currently, the only way to get started with Coderrect OpenRace is building the project.",
                )],
            ),
            mdx(
                "p",
                none(),
                [
                    text("Coderrect requires "),
                    mdx("strong", in_p(), [text("LLVM 10.0.x")]),
                    text(" to build. You can either installed a pre-built LLVM10 or build it on your own."),
                ],
            ),
            mdx(
                "p",
                none(),
                [
                    text("First make sure you have "),
                    mdx("inlineCode", in_p(), [text("git")]),
                    text(", "),
                    mdx("inlineCode", in_p(), [text("cmake")]),
                    text(" and "),
                    mdx("inlineCode", in_p(), [text("make")]),
                    text(" installed on your local environment."),
                ],
            ),
            mdx(
                "p",
                none(),
                [text("The script below builds and installs LLVM 10.0.1:")],
            ),
            code_block(Some("language-bash"), BUILD_LLVM),
            mdx(
                "p",
                none(),
                [
                    text("In order to build Coderrect OpenRace, we need to specify the directory "),
                    mdx("inlineCode", in_p(), [text("LLVM_DIR")]),
                    text(" containing "),
                    mdx("inlineCode", in_p(), [text("LLVMConfig.cmake")]),
                    text(", which should be "),
                    mdx(
                        "inlineCode",
                        in_p(),
                        [text("/path/to/llvm-project/build/lib/cmake/llvm/")],
                    ),
                    text("."),
                ],
            ),
            mdx(
                "p",
                none(),
                [
                    text("Now for building Coderrect OpenRace, you need to first install "),
                    mdx("inlineCode", in_p(), [text("conan")]),
                    text(" as package manager."),
                ],
            ),
            mdx(
                "p",
                none(),
                [
                    text(
                        "Coderrect OpenRace shoule be able to build with any C++ compiler with C++17 support.\nWe recommend using a compiler same or newer than ",
                    ),
                    mdx("strong", in_p(), [text("gcc9/clang10")]),
                    text(".\nThe script below builds Coderrect OpenRace:"),
                ],
            ),
            code_block(Some("language-bash"), BUILD_OPENRACE),
            mdx(
                "p",
                none(),
                [text(
                    "Now you have successfully built Coderrect OpenRace! Run our tester to check out its current status:",
                )],
            ),
            code_block(None, RUN_TESTER),
        ]
    }
}

fn text(value: &str) -> RenderNode {
    RenderNode::Text(value.to_string())
}

fn toc_value(entry: &TocEntry) -> Value {
    let children = entry.children.iter().map(toc_value).collect::<Vec<_>>();
    Value::Map(
        PropertyBag::new()
            .with("value", entry.value.as_str())
            .with("id", entry.id.as_str())
            .with("children", children),
    )
}

impl ContentUnit for GetStarted {
    fn front_matter(&self) -> &FrontMatter {
        &self.metadata.front_matter
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    fn render(&self, props: &PropertyBag) -> RenderNode {
        let components = props
            .get("components")
            .and_then(Value::as_components)
            .cloned();
        let rest = props.without(&["components"]);

        let mut wrapper_props = PropertyBag::merge([Some(&self.layout_props()), Some(&rest)]);
        wrapper_props.insert("mdxType", "MDXLayout");

        let body = self.body();
        let children = match components {
            Some(components) => {
                wrapper_props.insert("components", Value::Components(components.clone()));
                vec![RenderNode::provider(components, body)]
            }
            None => body,
        };

        mdx("wrapper", wrapper_props, children)
    }
}
