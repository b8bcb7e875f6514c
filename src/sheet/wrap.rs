/// Greedy word wrap to at most `limit` columns per line.
///
/// Whitespace separates words and is dropped where a line is broken. A word that would overflow
/// moves to the next line; a word longer than `limit` is kept whole on its own line. `-` is a
/// breakpoint that stays with the text before it, and existing newlines are kept. Always returns
/// at least one (possibly empty) line.
pub fn wrap_lines(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut w = WordWrap::new(limit);
    for c in text.chars() {
        w.push(c);
    }
    w.finish().split('\n').map(str::to_string).collect()
}

struct WordWrap {
    limit: usize,
    buf: String,
    space: String,
    word: String,
    line_len: usize,
}

impl WordWrap {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            buf: String::new(),
            space: String::new(),
            word: String::new(),
            line_len: 0,
        }
    }

    fn push(&mut self, c: char) {
        if c == '\n' {
            if self.word.is_empty() {
                if self.line_len + width(&self.space) > self.limit {
                    self.line_len = 0;
                } else {
                    self.buf.push_str(&self.space);
                }
                self.space.clear();
            }
            self.add_word();
            self.add_newline();
        } else if c.is_whitespace() {
            self.add_word();
            self.space.push(c);
        } else if c == '-' {
            self.add_space();
            self.add_word();
            self.buf.push(c);
            self.line_len += 1;
        } else {
            self.word.push(c);
            let word_len = width(&self.word);
            if self.line_len + width(&self.space) + word_len > self.limit && word_len < self.limit
            {
                self.add_newline();
            }
        }
    }

    fn finish(mut self) -> String {
        self.add_word();
        self.buf
    }

    fn add_space(&mut self) {
        self.line_len += width(&self.space);
        self.buf.push_str(&self.space);
        self.space.clear();
    }

    fn add_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        self.add_space();
        self.line_len += width(&self.word);
        self.buf.push_str(&self.word);
        self.word.clear();
    }

    fn add_newline(&mut self) {
        self.buf.push('\n');
        self.line_len = 0;
        self.space.clear();
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}
