mod simplify;
