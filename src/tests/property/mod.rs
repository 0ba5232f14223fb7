mod derivation_props;
