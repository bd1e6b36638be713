use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::ImageKind;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

/// Why a drop, paste or pick did not yield a file to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NoFile,
    TooMany(usize),
    Unsupported { name: String, mime: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoFile => write!(f, "no file selected"),
            Rejection::TooMany(count) => write!(f, "{} files dropped, only one is allowed", count),
            Rejection::Unsupported { name, mime } => {
                write!(f, "{} ({}) is not a JPG or PNG image", name, mime)
            }
        }
    }
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Applies the drop-zone rules: exactly one file, JPG or PNG.
pub fn pick_single<T>(candidates: Vec<(String, String, T)>) -> Result<T, Rejection> {
    let count = candidates.len();
    let mut candidates = candidates.into_iter();
    match (candidates.next(), count) {
        (None, _) => Err(Rejection::NoFile),
        (Some((mime, name, item)), 1) => match ImageKind::detect(&mime, &name) {
            Some(_) => Ok(item),
            None => Err(Rejection::Unsupported { name, mime }),
        },
        (Some(_), count) => Err(Rejection::TooMany(count)),
    }
}

pub fn take_single_image(file_list: &FileList) -> Result<GlooFile, Rejection> {
    let candidates = (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(|file| (file.type_(), file.name(), file))
        .collect();
    pick_single(candidates).map(GlooFile::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mime: &str, name: &str, id: u32) -> (String, String, u32) {
        (mime.to_string(), name.to_string(), id)
    }

    #[test]
    fn accepts_single_png_or_jpeg() {
        assert_eq!(pick_single(vec![candidate("image/png", "cat.png", 1)]), Ok(1));
        assert_eq!(pick_single(vec![candidate("image/jpeg", "dog.jpg", 2)]), Ok(2));
        assert_eq!(pick_single(vec![candidate("", "ship.JPEG", 3)]), Ok(3));
    }

    #[test]
    fn rejects_empty_selection() {
        assert_eq!(pick_single::<u32>(Vec::new()), Err(Rejection::NoFile));
    }

    #[test]
    fn rejects_more_than_one_file() {
        let dropped = vec![
            candidate("image/png", "cat.png", 1),
            candidate("image/png", "dog.png", 2),
        ];
        assert_eq!(pick_single(dropped), Err(Rejection::TooMany(2)));
    }

    #[test]
    fn rejects_other_file_types() {
        let result = pick_single(vec![candidate("image/gif", "loop.gif", 1)]);
        assert_eq!(
            result,
            Err(Rejection::Unsupported {
                name: "loop.gif".into(),
                mime: "image/gif".into(),
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "loop.gif (image/gif) is not a JPG or PNG image"
        );
    }
}
