use cipherforge::alphabet::Alphabet;
use cipherforge::corpus;
use cipherforge::model::BigramModel;

/// A few paragraphs of ordinary English, enough to give the bigram model a
/// usable signal without shipping a corpus file.
pub const ENGLISH_SAMPLE: &str = "It was a bright morning and the town was \
already awake when the letter arrived. Nobody in the house expected news from \
the coast, and the handwriting on the envelope belonged to no friend that any \
of them could name. The old man turned it over twice before opening it, and \
then he read it slowly, the way he read everything, as though the words might \
change if he hurried past them. Outside the window the market traders were \
setting out their stalls, calling to one another across the square, and the \
smell of fresh bread drifted up through the shutters. There was nothing in \
the letter that should have troubled him, and yet when he folded it away his \
hands were not quite steady. He had spent thirty years keeping the accounts \
of other people and he knew better than most men how a small number in the \
wrong column could unmake a fortune. That evening he walked down to the \
harbour and watched the boats come in, and he thought about the distance \
between the life he had planned and the life he had, and found, to his own \
surprise, that the difference no longer grieved him. The water was calm and \
the gulls followed the last boat all the way to the quay, and when the light \
finally failed he turned back up the hill toward the house with the letter \
still in his coat pocket and his mind already made up about the answer he \
would send in the morning.";

pub fn english_model() -> BigramModel {
    corpus::build_model(ENGLISH_SAMPLE)
}

/// Encrypt plain uppercase text with a Caesar shift (non-letters untouched).
pub fn caesar_encrypt(plain: &str, shift: u8) -> String {
    plain
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                let idx = (c as u8 - b'A' + shift) % 26;
                (b'A' + idx) as char
            } else {
                c
            }
        })
        .collect()
}

/// The key that decodes a Caesar shift: cipher letter maps back by `shift`.
pub fn caesar_key(shift: u8) -> Alphabet {
    let mut letters = [0u8; 26];
    for (i, l) in letters.iter_mut().enumerate() {
        *l = b'A' + ((i as u8 + 26 - shift) % 26);
    }
    Alphabet::from_letters(letters).unwrap()
}
