use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("HEAD", 1)];
const DIRS: [(&str, u8); 5] = [
    ("/", 5),
    ("/images/", 30),
    ("/images/icons/", 20),
    ("/docs/", 10),
    ("/shuttle/missions/", 10),
];
const EXTENSIONS: [(&str, u8); 6] = [
    ("gif", 40),
    ("GIF", 10),
    ("jpg", 10),
    ("html", 20),
    ("txt", 5),
    ("mpg", 2),
];
const NAMES: [&str; 8] = [
    "logo", "ksclogo", "launch", "countdown", "index", "small", "patch", "map",
];
const STATUS: [(u16, u8); 5] = [(200, 70), (302, 5), (304, 10), (404, 10), (500, 2)];

/// One line in the `HOST - - "METHOD PATH VERSION" BYTES STATUS` layout.
pub fn generate_request_line<R: Rng + ?Sized>(rng: &mut R, get_only: bool) -> String {
    let host = format!("10.0.{}.{}", rng.random_range(0..256), rng.random_range(0..256));
    let method = if get_only {
        "GET"
    } else {
        METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0
    };
    let dir = DIRS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let name = NAMES.choose(rng).unwrap();
    let ext = EXTENSIONS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(0..50_000);

    format!("{host} - - \"{method} {dir}{name}.{ext} HTTP/1.0\" {size} {status}")
}
