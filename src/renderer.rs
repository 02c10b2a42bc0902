use anyhow::Context;
use handlebars::Handlebars;

// Fixed markdown scaffold for a new post. Only the title is substituted.
const POST_SCAFFOLD: &str = r#"# {{title}}

Write your post content here.

## Heading 2

You can use markdown formatting:

- **Bold text**
- *Italic text*
- [Links](https://example.com)
- `code`

```python
# Code blocks
def example():
    pass
```

## Another Section

Add more content here.
"#;

pub(crate) fn generate_renderer() -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    // output is markdown, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("post", POST_SCAFFOLD)
        .context("post scaffold template")?;

    Ok(handlebars)
}
