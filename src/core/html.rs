// src/core/html.rs
// Tag scanning over raw markup, ASCII case-insensitive on tag and attribute
// names. ASCII lowercasing keeps byte offsets, so positions found in the
// lowercased copy index straight into the original.

/// One `<tag ...>inner</tag>` occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagBlock<'a> {
    /// The opening tag, `<` through `>` inclusive.
    pub open_tag: &'a str,
    /// Everything between the opening and closing tag, untouched.
    pub inner: &'a str,
}

impl<'a> TagBlock<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        attr(self.open_tag, name)
    }
}

/// Document-order iterator over blocks of one tag name.
pub struct TagBlocks<'a> {
    src: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

pub fn tag_blocks<'a>(src: &'a str, tag: &str) -> TagBlocks<'a> {
    let tag = tag.to_ascii_lowercase();
    TagBlocks {
        src,
        lc: src.to_ascii_lowercase(),
        open: join!("<", &tag),
        close: join!("</", &tag),
        pos: 0,
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = TagBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.lc.get(self.pos..)?.find(&self.open)? + self.pos;

            // Commented-out markup is not part of the document.
            if let Some(rel) = self.lc[self.pos..start].find("<!--") {
                let body = self.pos + rel + 4;
                self.pos = self.lc[body..].find("-->").map_or(self.src.len(), |r| body + r + 3);
                continue;
            }

            let after_name = start + self.open.len();

            // "<script" must not match "<scripts"
            if !is_name_boundary(self.lc.as_bytes().get(after_name).copied()) {
                self.pos = after_name;
                continue;
            }

            let Some(open_end) = open_tag_end(self.src, after_name) else {
                self.pos = self.src.len();
                return None;
            };
            let open_tag = &self.src[start..open_end];

            // Unclosed element: content runs to the end of the document.
            let (inner_end, next) = match self.lc[open_end..].find(&self.close) {
                Some(rel) => {
                    let close_start = open_end + rel;
                    let close_end = self.lc[close_start..]
                        .find('>')
                        .map(|r| close_start + r + 1)
                        .unwrap_or(self.src.len());
                    (close_start, close_end)
                }
                None => (self.src.len(), self.src.len()),
            };

            self.pos = next;
            return Some(TagBlock { open_tag, inner: &self.src[open_end..inner_end] });
        }
    }
}

fn is_name_boundary(b: Option<u8>) -> bool {
    match b {
        None => true,
        Some(c) => c.is_ascii_whitespace() || c == b'>' || c == b'/',
    }
}

/// Index just past the `>` closing an opening tag, skipping quoted values.
fn open_tag_end(s: &str, from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in s.as_bytes().iter().enumerate().skip(from) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i + 1),
            None => {}
        }
    }
    None
}

/// Value of attribute `name` in an opening tag. Bare attributes yield `""`.
pub fn attr<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let bytes = open_tag.as_bytes();
    let mut i = 1; // past '<'

    // tag name
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' && bytes[i] != b'/' {
        i += 1;
    }

    loop {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] == b'>' {
            return None;
        }

        let name_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let attr_name = &open_tag[name_start..i];

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let value = if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    let v_start = i + 1;
                    let v_end = open_tag[v_start..].find(q as char).map(|r| v_start + r).unwrap_or(bytes.len());
                    i = (v_end + 1).min(bytes.len());
                    &open_tag[v_start..v_end]
                }
                _ => {
                    let v_start = i;
                    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                        i += 1;
                    }
                    &open_tag[v_start..i]
                }
            }
        } else {
            ""
        };

        if attr_name.eq_ignore_ascii_case(name) {
            return Some(value);
        }
    }
}
