use std::{fmt, slice, str::FromStr};

use tracing::debug;

use crate::{
    codegen::{lang, Features, Generator},
    token::Token,
};

/// Generates the complete program text for `target`.
pub fn generate(target: Target, tokens: &[Token]) -> String {
    let features = Features::of(tokens);
    let code = match target {
        Target::Python => Generator::<lang::Python>::new(features).generate(tokens),
        Target::Go => Generator::<lang::Go>::new(features).generate(tokens),
        Target::Cpp => Generator::<lang::Cpp>::new(features).generate(tokens),
        Target::CSharp => Generator::<lang::CSharp>::new(features).generate(tokens),
        Target::Lua => Generator::<lang::Lua>::new(features).generate(tokens),
        Target::Ruby => Generator::<lang::Ruby>::new(features).generate(tokens),
        Target::Rust => Generator::<lang::Rust>::new(features).generate(tokens),
    };
    debug!(%target, tokens = tokens.len(), bytes = code.len(), "generated");
    code
}

/// Generates every target in `selection`, independently and in registry
/// order.
pub fn generate_all(selection: Selection, tokens: &[Token]) -> Vec<(Target, String)> {
    selection
        .targets()
        .iter()
        .map(|&target| (target, generate(target, tokens)))
        .collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Python,
    Go,
    Cpp,
    CSharp,
    Lua,
    Ruby,
    Rust,
}

impl Target {
    /// Every concrete target, in registry order.
    pub const ALL: &'static [Target] = &[
        Target::Python,
        Target::Go,
        Target::Cpp,
        Target::CSharp,
        Target::Lua,
        Target::Ruby,
        Target::Rust,
    ];

    pub fn descriptor(self) -> &'static TargetDescriptor {
        &DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().id)
    }
}

/// The placeholder a run template uses for the generated file's path.
pub const OUT_PLACEHOLDER: &str = "{out}";

#[derive(Debug)]
pub struct TargetDescriptor {
    pub target: Target,
    pub id: &'static str,
    /// The target's number in the interactive menu.
    pub key: &'static str,
    pub name: &'static str,
    /// Appended to the base name of the output file.
    pub suffix: &'static str,
    pub extension: &'static str,
    /// Command that runs the generated file, if the target is runnable.
    pub run: Option<&'static [&'static str]>,
}

impl TargetDescriptor {
    /// Returns `<base><suffix><extension>`.
    pub fn file_name(&self, base: &str) -> String {
        format!("{base}{}{}", self.suffix, self.extension)
    }

    /// Substitutes `path` into the run template, returning the argv.
    pub fn run_command(&self, path: &str) -> Option<Vec<String>> {
        let template = self.run?;
        let argv = template
            .iter()
            .map(|&arg| {
                if arg == OUT_PLACEHOLDER {
                    path.to_owned()
                } else {
                    arg.to_owned()
                }
            })
            .collect();
        Some(argv)
    }
}

// Indexed by `Target as usize`.
static DESCRIPTORS: [TargetDescriptor; 7] = [
    TargetDescriptor {
        target: Target::Python,
        id: "python",
        key: "1",
        name: "Python",
        suffix: "_py",
        extension: ".py",
        run: Some(&["python", OUT_PLACEHOLDER]),
    },
    TargetDescriptor {
        target: Target::Go,
        id: "go",
        key: "2",
        name: "Go",
        suffix: "_go",
        extension: ".go",
        run: Some(&["go", "run", OUT_PLACEHOLDER]),
    },
    TargetDescriptor {
        target: Target::Cpp,
        id: "cpp",
        key: "3",
        name: "C++",
        suffix: "_cpp",
        extension: ".cpp",
        run: None,
    },
    TargetDescriptor {
        target: Target::CSharp,
        id: "csharp",
        key: "4",
        name: "C#",
        suffix: "_cs",
        extension: ".cs",
        run: None,
    },
    TargetDescriptor {
        target: Target::Lua,
        id: "lua",
        key: "5",
        name: "Lua",
        suffix: "_lua",
        extension: ".lua",
        run: None,
    },
    TargetDescriptor {
        target: Target::Ruby,
        id: "ruby",
        key: "6",
        name: "Ruby",
        suffix: "_rb",
        extension: ".rb",
        run: None,
    },
    TargetDescriptor {
        target: Target::Rust,
        id: "rust",
        key: "7",
        name: "Rust",
        suffix: "_rs",
        extension: ".rs",
        run: None,
    },
];

/// What a target identifier asks for: one target, or the fan-out over all
/// of them. `All` never reaches a generator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selection {
    One(Target),
    All,
}

impl Selection {
    pub fn targets(self) -> &'static [Target] {
        match self {
            Selection::One(target) => slice::from_ref(&Target::ALL[target as usize]),
            Selection::All => Target::ALL,
        }
    }
}

impl FromStr for Selection {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Selection, UnknownTarget> {
        let lower = s.trim().to_ascii_lowercase();
        SELECTIONS
            .get(lower.as_str())
            .copied()
            .ok_or_else(|| UnknownTarget(s.to_owned()))
    }
}

/// Accepts both identifiers and menu keys.
pub static SELECTIONS: phf::Map<&'static str, Selection> = phf::phf_map! {
    "python" => Selection::One(Target::Python),
    "go" => Selection::One(Target::Go),
    "cpp" => Selection::One(Target::Cpp),
    "csharp" => Selection::One(Target::CSharp),
    "lua" => Selection::One(Target::Lua),
    "ruby" => Selection::One(Target::Ruby),
    "rust" => Selection::One(Target::Rust),
    "all" => Selection::All,
    "1" => Selection::One(Target::Python),
    "2" => Selection::One(Target::Go),
    "3" => Selection::One(Target::Cpp),
    "4" => Selection::One(Target::CSharp),
    "5" => Selection::One(Target::Lua),
    "6" => Selection::One(Target::Ruby),
    "7" => Selection::One(Target::Rust),
    "0" => Selection::All,
};

#[derive(Debug, thiserror::Error)]
#[error("unknown target `{0}` (expected one of python, go, cpp, csharp, lua, ruby, rust, all, or 0-7)")]
pub struct UnknownTarget(pub String);
