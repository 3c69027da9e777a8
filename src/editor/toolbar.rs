//! Toolbar formatting commands.
//!
//! Each command maps to a deterministic [`EditRule`] applied at or around
//! the current selection by [`MarkdownEditor`](super::MarkdownEditor).

/// Template inserted by [`ToolbarCommand::Table`].
const TABLE_TEMPLATE: &str = "\n| Header 1 | Header 2 |\n| -------- | -------- |\n| Cell 1   | Cell 2   |\n";

/// Text transformation performed by a toolbar command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRule {
    /// Surround the selection with `before` and `after`
    Wrap {
        before: &'static str,
        after: &'static str,
    },
    /// Insert a prefix at the start of the cursor line
    InsertPrefix(String),
    /// Insert a line prefix, or remove it when already present
    TogglePrefix(&'static str),
    /// Insert text after the selection
    Insert(&'static str),
}

/// Markdown formatting commands offered by the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    /// Bold text (**text**)
    Bold,
    /// Italic text (*text*)
    Italic,
    /// Strikethrough (~~text~~)
    Strikethrough,
    /// Inline code (`code`)
    InlineCode,
    /// Heading level 1-6, clamped
    Heading(u8),
    /// Bullet list item
    BulletList,
    /// Numbered list item
    NumberedList,
    /// Task list item
    TaskList,
    /// Blockquote
    Quote,
    /// Fenced code block
    CodeBlock,
    /// Link ([text](url))
    Link,
    /// Image (![alt](url))
    Image,
    /// Two column table skeleton
    Table,
    /// Inline math ($x$)
    InlineMath,
    /// Display math ($$x$$)
    BlockMath,
    /// Thematic break
    HorizontalRule,
}

impl ToolbarCommand {
    /// Commands in toolbar order.
    pub const TOOLBAR: [ToolbarCommand; 17] = [
        Self::Bold,
        Self::Italic,
        Self::Strikethrough,
        Self::Heading(1),
        Self::Heading(2),
        Self::Heading(3),
        Self::BulletList,
        Self::NumberedList,
        Self::TaskList,
        Self::Quote,
        Self::InlineCode,
        Self::CodeBlock,
        Self::Link,
        Self::Image,
        Self::Table,
        Self::InlineMath,
        Self::BlockMath,
    ];

    /// Edit rule this command applies.
    pub fn rule(&self) -> EditRule {
        match self {
            Self::Bold => EditRule::Wrap {
                before: "**",
                after: "**",
            },
            Self::Italic => EditRule::Wrap {
                before: "*",
                after: "*",
            },
            Self::Strikethrough => EditRule::Wrap {
                before: "~~",
                after: "~~",
            },
            Self::InlineCode => EditRule::Wrap {
                before: "`",
                after: "`",
            },
            Self::CodeBlock => EditRule::Wrap {
                before: "```\n",
                after: "\n```",
            },
            Self::Link => EditRule::Wrap {
                before: "[",
                after: "](url)",
            },
            Self::Image => EditRule::Wrap {
                before: "![",
                after: "](url)",
            },
            Self::InlineMath => EditRule::Wrap {
                before: "$",
                after: "$",
            },
            Self::BlockMath => EditRule::Wrap {
                before: "$$\n",
                after: "\n$$",
            },
            Self::Heading(level) => {
                let level = (*level).clamp(1, 6) as usize;
                EditRule::InsertPrefix(format!("{} ", "#".repeat(level)))
            }
            Self::BulletList => EditRule::TogglePrefix("- "),
            Self::NumberedList => EditRule::TogglePrefix("1. "),
            Self::TaskList => EditRule::TogglePrefix("- [ ] "),
            Self::Quote => EditRule::TogglePrefix("> "),
            Self::Table => EditRule::Insert(TABLE_TEMPLATE),
            Self::HorizontalRule => EditRule::Insert("\n\n---\n\n"),
        }
    }

    /// Short button label.
    pub fn label(&self) -> String {
        let label = match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Strikethrough => "S",
            Self::InlineCode => "Code",
            Self::Heading(level) => return format!("H{}", (*level).clamp(1, 6)),
            Self::BulletList => "List",
            Self::NumberedList => "1.",
            Self::TaskList => "Task",
            Self::Quote => "Quote",
            Self::CodeBlock => "Code Block",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::Table => "Table",
            Self::InlineMath => "LaTeX",
            Self::BlockMath => "LaTeX Block",
            Self::HorizontalRule => "Rule",
        };
        label.to_string()
    }

    /// Tooltip text, with the keyboard shortcut when one exists.
    pub fn tooltip(&self) -> String {
        let name = match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Strikethrough => "Strikethrough",
            Self::InlineCode => "Inline Code",
            Self::Heading(level) => return format!("Heading {}", (*level).clamp(1, 6)),
            Self::BulletList => "Bullet List",
            Self::NumberedList => "Numbered List",
            Self::TaskList => "Task List",
            Self::Quote => "Quote",
            Self::CodeBlock => "Code Block",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::Table => "Table",
            Self::InlineMath => "Inline LaTeX",
            Self::BlockMath => "LaTeX Block",
            Self::HorizontalRule => "Horizontal Rule",
        };
        match self.shortcut_label() {
            Some(shortcut) => format!("{} ({})", name, shortcut),
            None => name.to_string(),
        }
    }

    /// Keyboard shortcut label, if the command has one.
    pub fn shortcut_label(&self) -> Option<&'static str> {
        match self {
            Self::Bold => Some("Ctrl+B"),
            Self::Italic => Some("Ctrl+I"),
            Self::Link => Some("Ctrl+K"),
            _ => None,
        }
    }
}
