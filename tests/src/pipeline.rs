mod compare;
mod summarise;
mod util;
mod xml2csv;
