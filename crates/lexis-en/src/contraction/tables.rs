// Literal contraction tables, ordered longest key first

/// Contractions written without an apostrophe, ordered longest key first.
pub const PLAIN_CONTRACTIONS: &[(&str, &str)] = &[
    ("shouldnt", "should not"),
    ("shoulda", "should have"),
    ("whatcha", "what are you"),
    ("dontcha", "do not you"),
    ("whaddya", "what do you"),
    ("couldnt", "could not"),
    ("wouldnt", "would not"),
    ("oughta", "ought to"),
    ("coulda", "could have"),
    ("woulda", "would have"),
    ("mighta", "might have"),
    ("gotcha", "got you"),
    ("betcha", "bet you"),
    ("boutta", "about to"),
    ("wassup", "what is up"),
    ("doesnt", "does not"),
    ("werent", "were not"),
    ("havent", "have not"),
    ("mustnt", "must not"),
    ("neednt", "need not"),
    ("theyre", "they are"),
    ("theyve", "they have"),
    ("wheres", "where is"),
    ("theres", "there is"),
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "got to"),
    ("kinda", "kind of"),
    ("sorta", "sort of"),
    ("lemme", "let me"),
    ("gimme", "give me"),
    ("dunno", "do not know"),
    ("outta", "out of"),
    ("lotta", "lot of"),
    ("hafta", "have to"),
    ("musta", "must have"),
    ("tryna", "trying to"),
    ("innit", "is it not"),
    ("didja", "did you"),
    ("didnt", "did not"),
    ("arent", "are not"),
    ("wasnt", "was not"),
    ("hasnt", "has not"),
    ("hadnt", "had not"),
    ("youre", "you are"),
    ("youve", "you have"),
    ("thats", "that is"),
    ("whats", "what is"),
    ("heres", "here is"),
    ("aint", "is not"),
    ("dont", "do not"),
    ("isnt", "is not"),
    ("weve", "we have"),
    ("ima", "i am going to"),
    ("cuz", "because"),
    ("ive", "i have"),
    ("im", "i am"),
];

/// Apostrophe contractions, ordered longest key first.
///
/// The short clitic keys (`n't`, `'re`, `'ve`, `'ll`, `'m`, `'d`) also match
/// as suffixes of otherwise unlisted tokens; see [`super::is_clitic`].
pub const APOSTROPHE_CONTRACTIONS: &[(&str, &str)] = &[
    ("shouldn't've", "should not have"),
    ("couldn't've", "could not have"),
    ("mightn't've", "might not have"),
    ("oughtn't've", "ought not have"),
    ("wouldn't've", "would not have"),
    ("something's", "something is"),
    ("everybody's", "everybody is"),
    ("mustn't've", "must not have"),
    ("needn't've", "need not have"),
    ("there'd've", "there would have"),
    ("they'll've", "they will have"),
    ("what'll've", "what will have"),
    ("y'all'd've", "you all would have"),
    ("somebody's", "somebody is"),
    ("everyone's", "everyone is"),
    ("hadn't've", "had not have"),
    ("shan't've", "shall not have"),
    ("she'll've", "she will have"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that'd've", "that would have"),
    ("they'd've", "they would have"),
    ("who'll've", "who will have"),
    ("you'll've", "you will have"),
    ("someone's", "someone is"),
    ("can't've", "cannot have"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("he'll've", "he will have"),
    ("it'll've", "it will have"),
    ("might've", "might have"),
    ("mightn't", "might not"),
    ("oughtn't", "ought not"),
    ("she'd've", "she would have"),
    ("we'll've", "we will have"),
    ("where've", "where have"),
    ("won't've", "will not have"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all're", "you all are"),
    ("y'all've", "you all have"),
    ("you'd've", "you would have"),
    ("nobody's", "nobody is"),
    ("doesn't", "does not"),
    ("haven't", "have not"),
    ("he'd've", "he would have"),
    ("how'd'y", "how do you"),
    ("i'll've", "i will have"),
    ("it'd've", "it would have"),
    ("must've", "must have"),
    ("mustn't", "must not"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("sha'n't", "shall not"),
    ("there'd", "there would"),
    ("there's", "there is"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("we'd've", "we would have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what've", "what have"),
    ("when've", "when have"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("will've", "will have"),
    ("y'all'd", "you all would"),
    ("aren't", "are not"),
    ("'cause", "because"),
    ("didn't", "did not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("how'll", "how will"),
    ("i'd've", "i would have"),
    ("mayn't", "may not"),
    ("shan't", "shall not"),
    ("she'll", "she will"),
    ("that'd", "that would"),
    ("that's", "that is"),
    ("they'd", "they would"),
    ("wasn't", "was not"),
    ("what's", "what is"),
    ("when's", "when is"),
    ("who'll", "who will"),
    ("who've", "who have"),
    ("why've", "why have"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
    ("here's", "here is"),
    ("ain't", "is not"),
    ("can't", "cannot"),
    ("don't", "do not"),
    ("he'll", "he will"),
    ("how'd", "how did"),
    ("how's", "how is"),
    ("isn't", "is not"),
    ("it'll", "it will"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("she'd", "she would"),
    ("she's", "she is"),
    ("so've", "so have"),
    ("to've", "to have"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("who's", "who is"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("y'all", "you all"),
    ("you'd", "you would"),
    ("'twas", "it was"),
    ("ne'er", "never"),
    ("gov't", "government"),
    ("he'd", "he would"),
    ("he's", "he is"),
    ("i'll", "i will"),
    ("i've", "i have"),
    ("it'd", "it would"),
    ("it's", "it is"),
    ("so's", "so is"),
    ("we'd", "we would"),
    ("'tis", "it is"),
    ("e'er", "ever"),
    ("o'er", "over"),
    ("i'd", "i would"),
    ("i'm", "i am"),
    ("n't", "not"),
    ("'re", "are"),
    ("'ve", "have"),
    ("'ll", "will"),
    ("'m", "am"),
    ("'d", "would"),
];
