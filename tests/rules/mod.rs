mod md007_test;
mod md010_test;
mod md013_test;
mod md024_test;
mod md030_test;
