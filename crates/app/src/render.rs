use std::io::{self, Write};

use guestbook_core::{Comment, Draft, FormMode};

pub fn write_comment<W: Write>(out: &mut W, comment: &Comment) -> io::Result<()> {
    writeln!(
        out,
        "#{} {} ({})",
        comment.id, comment.author, comment.created_or_updated_at
    )?;
    for line in comment.body.lines() {
        writeln!(out, "    {line}")?;
    }
    Ok(())
}

pub fn write_comments<W: Write>(out: &mut W, comments: &[Comment]) -> io::Result<()> {
    if comments.is_empty() {
        return writeln!(out, "no comments yet");
    }
    for comment in comments {
        write_comment(out, comment)?;
    }
    Ok(())
}

pub fn write_draft<W: Write>(out: &mut W, mode: FormMode, draft: &Draft) -> io::Result<()> {
    writeln!(out, "mode:   {}", mode_label(mode))?;
    writeln!(out, "author: {}", draft.author)?;
    writeln!(out, "body:   {}", draft.body)
}

pub fn mode_label(mode: FormMode) -> String {
    match mode {
        FormMode::Create => "add".to_string(),
        FormMode::Update(id) => format!("update #{id}"),
    }
}

#[cfg(test)]
mod tests {
    use guestbook_core::CommentId;

    use super::*;

    #[test]
    fn comment_body_is_indented_per_line() {
        let comment = Comment {
            id: CommentId::new(7),
            author: "Ada".to_string(),
            body: "one\ntwo".to_string(),
            created_or_updated_at: "2024-01-01 10:00:00".to_string(),
        };
        let mut out = Vec::new();
        write_comment(&mut out, &comment).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#7 Ada (2024-01-01 10:00:00)\n    one\n    two\n"
        );
    }

    #[test]
    fn mode_labels() {
        assert_eq!(mode_label(FormMode::Create), "add");
        assert_eq!(mode_label(FormMode::Update(CommentId::new(3))), "update #3");
    }
}
